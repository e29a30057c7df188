mod common;

use common::{projects, typed, ScriptedView};
use projpick::ui::picker::{PickerIntent, PickerState};
use projpick::{SelectionDialog, SelectionResult};

#[test]
fn selected_candidate_is_reported_with_id() {
    let mut dialog = SelectionDialog::new(projects(), "");
    let mut view = ScriptedView::new([
        PickerIntent::MoveDown,
        PickerIntent::MoveDown,
        PickerIntent::Confirm,
    ]);

    dialog.run(&mut view).unwrap();

    assert!(dialog.was_confirmed());
    assert_eq!(dialog.label(), Some("MeanReversion"));
    assert_eq!(dialog.id(), Some(102));
}

#[test]
fn typed_name_is_reported_without_id() {
    let mut dialog = SelectionDialog::new(projects(), "");
    let mut script = typed("NewProj");
    script.push(PickerIntent::Confirm);

    dialog.run(&mut ScriptedView::new(script)).unwrap();

    assert_eq!(
        dialog.result(),
        SelectionResult {
            confirmed: true,
            label: Some("NewProj".into()),
            id: None,
        }
    );
}

#[test]
fn empty_confirm_keeps_dialog_open_and_flags_field() {
    let mut dialog = SelectionDialog::new(projects(), "");

    dialog.dispatch(PickerIntent::Confirm);
    assert!(dialog.is_open());
    assert!(dialog.state().is_invalid());
    assert!(!dialog.was_confirmed());

    dialog.dispatch(PickerIntent::Confirm);
    assert!(dialog.is_open());
    assert!(dialog.state().is_invalid());
}

#[test]
fn user_can_retry_after_validation_error() {
    let mut dialog = SelectionDialog::new(projects(), "");
    let mut script = vec![PickerIntent::Confirm];
    script.extend(typed("X"));
    script.push(PickerIntent::Confirm);

    dialog.run(&mut ScriptedView::new(script)).unwrap();

    assert!(dialog.was_confirmed());
    assert_eq!(dialog.label(), Some("X"));
}

#[test]
fn cancel_is_unconfirmed_whatever_was_entered() {
    let mut dialog = SelectionDialog::new(projects(), "Suggested");
    let mut view = ScriptedView::new([PickerIntent::MoveDown, PickerIntent::Cancel]);

    dialog.run(&mut view).unwrap();

    assert!(!dialog.was_confirmed());
    assert_eq!(dialog.label(), None);
    assert_eq!(dialog.id(), None);
    assert_eq!(dialog.result(), SelectionResult::default());
}

#[test]
fn default_label_confirms_as_is() {
    let mut dialog = SelectionDialog::new(projects(), "Foo");
    dialog.run(&mut ScriptedView::new([PickerIntent::Confirm])).unwrap();

    assert!(dialog.was_confirmed());
    assert_eq!(dialog.label(), Some("Foo"));
    assert_eq!(dialog.id(), None);
}

#[test]
fn display_order_matches_input_order() {
    let dialog = SelectionDialog::new(projects(), "");
    let PickerState::Open { candidates, .. } = dialog.state() else {
        panic!("expected Open");
    };
    let ids: Vec<i64> = candidates.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![101, 102, 103]);
}

#[test]
fn actions_after_close_are_ignored() {
    let mut dialog = SelectionDialog::new(projects(), "");
    dialog.dispatch(PickerIntent::MoveDown);
    dialog.dispatch(PickerIntent::Confirm);
    let first = dialog.result();

    dialog.dispatch(PickerIntent::Cancel);
    dialog.dispatch(PickerIntent::MoveDown);
    dialog.dispatch(PickerIntent::Confirm);

    assert_eq!(dialog.result(), first);
    assert_eq!(dialog.id(), Some(101));
}

#[test]
fn view_stops_once_dialog_closes() {
    let mut dialog = SelectionDialog::new(projects(), "");
    let mut view = ScriptedView::new([
        PickerIntent::Cancel,
        PickerIntent::MoveDown,
        PickerIntent::Confirm,
    ]);

    dialog.run(&mut view).unwrap();

    assert_eq!(view.unused, 2);
    assert_eq!(view.close_calls, 1);
}

#[test]
fn failed_show_still_closes_view_and_stays_unconfirmed() {
    let mut dialog = SelectionDialog::new(projects(), "Foo");
    let mut view = ScriptedView::failing(Vec::<PickerIntent>::new());

    let err = dialog.run(&mut view).unwrap_err();

    assert!(err.to_string().contains("tty went away"));
    assert!(view.shown);
    assert_eq!(view.close_calls, 1);
    assert!(!dialog.was_confirmed());
}
