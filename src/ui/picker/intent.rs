use crate::candidates::Candidate;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PickerIntent {
    /// Open the picker with a fresh candidate list and a suggested name.
    Load {
        candidates: Vec<Candidate>,
        default_label: String,
        visible_rows: usize,
    },
    MoveUp,
    MoveDown,
    /// Select the candidate at this list index.
    Select(usize),
    InsertChar(char),
    /// Bracketed paste into the name field.
    Paste(String),
    Backspace,
    ClearText,
    /// Accept the selection or the typed name. Flags the field when both are empty.
    Confirm,
    Cancel,
}

impl Intent for PickerIntent {}
