use crate::dialog::SelectionResult;
use crate::ui::mvi::Reducer;
use crate::ui::picker::intent::PickerIntent;
use crate::ui::picker::state::PickerState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Confirmed and Cancelled are terminal; the result is written once.
        if state.is_closed() {
            return state;
        }

        match intent {
            PickerIntent::Load {
                candidates,
                default_label,
                visible_rows,
            } => PickerState::Open {
                candidates,
                text: default_label,
                selected: None,
                scroll_offset: 0,
                visible_rows: visible_rows.max(1),
                invalid: false,
            },
            PickerIntent::Cancel => match state {
                PickerState::Open { .. } => PickerState::Cancelled,
                other => other,
            },
            PickerIntent::Confirm => confirm(state),
            PickerIntent::MoveUp => move_selection(state, Direction::Up),
            PickerIntent::MoveDown => move_selection(state, Direction::Down),
            PickerIntent::Select(index) => select(state, index),
            PickerIntent::InsertChar(ch) => edit(state, |text| text.push(ch)),
            PickerIntent::Paste(pasted) => edit(state, |text| {
                text.extend(pasted.chars().filter(|c| *c != '\n' && *c != '\r'))
            }),
            PickerIntent::Backspace => edit(state, |text| {
                text.pop();
            }),
            PickerIntent::ClearText => edit(state, String::clear),
        }
    }
}

enum Direction {
    Up,
    Down,
}

/// Only an explicit list selection reports an id. Text that happens to equal
/// a candidate name, including the pre-filled default, is reported as a new
/// name; an auto-completing combo box would report that candidate's id instead.
fn confirm(state: PickerState) -> PickerState {
    match state {
        PickerState::Open {
            candidates,
            text,
            selected,
            scroll_offset,
            visible_rows,
            ..
        } => {
            if let Some(candidate) = selected.and_then(|index| candidates.get(index)) {
                return PickerState::Confirmed(SelectionResult {
                    confirmed: true,
                    label: Some(candidate.name.clone()),
                    id: Some(candidate.id),
                });
            }

            if !text.is_empty() {
                return PickerState::Confirmed(SelectionResult {
                    confirmed: true,
                    label: Some(text),
                    id: None,
                });
            }

            PickerState::Open {
                candidates,
                text,
                selected,
                scroll_offset,
                visible_rows,
                invalid: true,
            }
        }
        other => other,
    }
}

fn move_selection(state: PickerState, direction: Direction) -> PickerState {
    let next = match &state {
        PickerState::Open {
            candidates,
            selected,
            ..
        } if !candidates.is_empty() => {
            let last = candidates.len() - 1;
            Some(match (direction, *selected) {
                (Direction::Down, None) => 0,
                (Direction::Down, Some(i)) if i >= last => 0,
                (Direction::Down, Some(i)) => i + 1,
                (Direction::Up, None) | (Direction::Up, Some(0)) => last,
                (Direction::Up, Some(i)) => (i - 1).min(last),
            })
        }
        _ => None,
    };

    match next {
        Some(index) => select(state, index),
        None => state,
    }
}

fn select(state: PickerState, index: usize) -> PickerState {
    match state {
        PickerState::Open {
            candidates,
            text,
            selected,
            scroll_offset,
            visible_rows,
            invalid,
        } => {
            if index >= candidates.len() {
                return PickerState::Open {
                    candidates,
                    text,
                    selected,
                    scroll_offset,
                    visible_rows,
                    invalid,
                };
            }
            // Picking a row mirrors it into the name field, like a combo box.
            let text = candidates[index].name.clone();
            let scroll_offset = scroll_to(index, scroll_offset, visible_rows);
            PickerState::Open {
                candidates,
                text,
                selected: Some(index),
                scroll_offset,
                visible_rows,
                invalid: false,
            }
        }
        other => other,
    }
}

fn edit(state: PickerState, apply: impl FnOnce(&mut String)) -> PickerState {
    match state {
        PickerState::Open {
            candidates,
            mut text,
            scroll_offset,
            visible_rows,
            ..
        } => {
            apply(&mut text);
            PickerState::Open {
                candidates,
                text,
                selected: None,
                scroll_offset,
                visible_rows,
                invalid: false,
            }
        }
        other => other,
    }
}

/// Smallest scroll change that keeps `index` within the visible window.
fn scroll_to(index: usize, scroll_offset: usize, visible_rows: usize) -> usize {
    if index < scroll_offset {
        index
    } else if index >= scroll_offset + visible_rows {
        index + 1 - visible_rows
    } else {
        scroll_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::Candidate;

    fn open(rows: usize) -> PickerState {
        PickerReducer::reduce(
            PickerState::Hidden,
            PickerIntent::Load {
                candidates: (1..=5).map(|i| Candidate::new(i, format!("P{i}"))).collect(),
                default_label: String::new(),
                visible_rows: rows,
            },
        )
    }

    fn scroll_offset(state: &PickerState) -> usize {
        match state {
            PickerState::Open { scroll_offset, .. } => *scroll_offset,
            _ => panic!("expected Open"),
        }
    }

    #[test]
    fn scroll_follows_selection_down() {
        let mut state = open(2);
        for _ in 0..3 {
            state = PickerReducer::reduce(state, PickerIntent::MoveDown);
        }
        assert_eq!(state.selected_candidate().map(|c| c.id), Some(3));
        assert_eq!(scroll_offset(&state), 1);
    }

    #[test]
    fn wrap_to_last_scrolls_to_bottom() {
        let state = PickerReducer::reduce(open(2), PickerIntent::MoveUp);
        assert_eq!(state.selected_candidate().map(|c| c.id), Some(5));
        assert_eq!(scroll_offset(&state), 3);
    }

    #[test]
    fn wrap_back_to_first_scrolls_to_top() {
        let mut state = PickerReducer::reduce(open(2), PickerIntent::MoveUp);
        state = PickerReducer::reduce(state, PickerIntent::MoveDown);
        assert_eq!(state.selected_candidate().map(|c| c.id), Some(1));
        assert_eq!(scroll_offset(&state), 0);
    }

    #[test]
    fn zero_visible_rows_is_clamped() {
        let state = open(0);
        assert!(matches!(state, PickerState::Open { visible_rows: 1, .. }));
    }

    #[test]
    fn paste_drops_line_breaks() {
        let state = PickerReducer::reduce(open(2), PickerIntent::Paste("New\r\nProj".into()));
        assert_eq!(state.text(), Some("NewProj"));
    }
}
