use crate::ui::picker::PickerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into a picker intent. Unbound keys and releases map to `None`.
pub fn intent_for_key(key: KeyEvent) -> Option<PickerIntent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if is_ctrl_char(key, 'c') {
        return Some(PickerIntent::Cancel);
    }
    if is_ctrl_char(key, 'u') {
        return Some(PickerIntent::ClearText);
    }
    if is_ctrl_char(key, 'p') {
        return Some(PickerIntent::MoveUp);
    }
    if is_ctrl_char(key, 'n') {
        return Some(PickerIntent::MoveDown);
    }

    match key.code {
        KeyCode::Enter => Some(PickerIntent::Confirm),
        KeyCode::Esc => Some(PickerIntent::Cancel),
        KeyCode::Up => Some(PickerIntent::MoveUp),
        KeyCode::Down => Some(PickerIntent::MoveDown),
        KeyCode::Backspace => Some(PickerIntent::Backspace),
        KeyCode::Char(ch)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(PickerIntent::InsertChar(ch))
        }
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn enter_confirms_and_escape_cancels() {
        assert!(matches!(intent_for_key(press(KeyCode::Enter)), Some(PickerIntent::Confirm)));
        assert!(matches!(intent_for_key(press(KeyCode::Esc)), Some(PickerIntent::Cancel)));
        assert!(matches!(intent_for_key(ctrl('c')), Some(PickerIntent::Cancel)));
    }

    #[test]
    fn printable_chars_are_typed() {
        assert!(matches!(
            intent_for_key(press(KeyCode::Char('N'))),
            Some(PickerIntent::InsertChar('N'))
        ));
        assert!(matches!(
            intent_for_key(KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT)),
            Some(PickerIntent::InsertChar('P'))
        ));
    }

    #[test]
    fn control_chords_do_not_type() {
        assert!(matches!(intent_for_key(ctrl('u')), Some(PickerIntent::ClearText)));
        assert!(matches!(intent_for_key(ctrl('n')), Some(PickerIntent::MoveDown)));
        assert!(intent_for_key(ctrl('x')).is_none());
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(intent_for_key(release).is_none());
    }
}
