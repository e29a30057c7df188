use crate::candidates::Candidate;
use crate::dialog::SelectionResult;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PickerState {
    /// Not loaded yet.
    #[default]
    Hidden,
    Open {
        /// Display order is input order.
        candidates: Vec<Candidate>,
        /// Contents of the name field.
        text: String,
        /// Index into `candidates`. `None` means the text is free-typed.
        selected: Option<usize>,
        scroll_offset: usize,
        visible_rows: usize,
        /// Set by a confirm that had nothing to report; cleared by the next edit.
        invalid: bool,
    },
    Confirmed(SelectionResult),
    Cancelled,
}

impl UiState for PickerState {}

impl PickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Confirmed(_) | Self::Cancelled)
    }

    /// Whether the name field currently carries the error indicator.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Open { invalid: true, .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Open { text, .. } => Some(text),
            _ => None,
        }
    }

    pub fn selected_candidate(&self) -> Option<&Candidate> {
        match self {
            Self::Open {
                candidates,
                selected: Some(index),
                ..
            } => candidates.get(*index),
            _ => None,
        }
    }

    /// The outcome as seen by the caller. Unconfirmed unless the picker
    /// reached `Confirmed`.
    pub fn result(&self) -> SelectionResult {
        match self {
            Self::Confirmed(result) => result.clone(),
            _ => SelectionResult::default(),
        }
    }
}
