//! The selection dialog as seen by its caller.
//!
//! A [`SelectionDialog`] owns the picker state and is driven by a
//! [`ModalView`], which supplies the modal loop. Once the view returns,
//! the caller reads the outcome through the accessors.

use serde::{Deserialize, Serialize};

use crate::candidates::Candidate;
use crate::error::DialogError;
use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickerIntent, PickerReducer, PickerState};

/// Visible rows used when the caller does not pick a number.
pub const DEFAULT_VISIBLE_ROWS: usize = 8;

/// What the user decided. `label` and `id` are only meaningful when
/// `confirmed` is true; `id` is `None` for a typed name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionResult {
    pub confirmed: bool,
    pub label: Option<String>,
    pub id: Option<i64>,
}

/// Something that can host a dialog modally.
pub trait ModalView {
    /// Runs the modal loop, feeding user actions to `dialog` until it is no
    /// longer open.
    fn show(&mut self, dialog: &mut SelectionDialog) -> Result<(), DialogError>;

    /// Releases whatever `show` acquired. Safe to call more than once.
    fn close(&mut self) -> Result<(), DialogError>;
}

#[derive(Debug)]
pub struct SelectionDialog {
    state: PickerState,
}

impl SelectionDialog {
    pub fn new(candidates: Vec<Candidate>, default_label: impl Into<String>) -> Self {
        Self::with_visible_rows(candidates, default_label, DEFAULT_VISIBLE_ROWS)
    }

    pub fn with_visible_rows(
        candidates: Vec<Candidate>,
        default_label: impl Into<String>,
        visible_rows: usize,
    ) -> Self {
        let mut dialog = Self {
            state: PickerState::default(),
        };
        dialog.dispatch(PickerIntent::Load {
            candidates,
            default_label: default_label.into(),
            visible_rows,
        });
        dialog
    }

    pub fn dispatch(&mut self, intent: PickerIntent) {
        tracing::debug!(?intent, "picker intent");
        let confirming = matches!(intent, PickerIntent::Confirm);
        let state = std::mem::take(&mut self.state);
        self.state = PickerReducer::reduce(state, intent);

        if confirm_rejected(confirming, &self.state) {
            tracing::debug!("confirm rejected: no selection and empty name");
        }
        if let (true, PickerState::Confirmed(result)) = (confirming, &self.state) {
            tracing::info!(label = ?result.label, id = ?result.id, "selection confirmed");
        }
    }

    /// Shows the dialog on `view` and always releases the view afterwards.
    ///
    /// An error from `show` leaves the dialog unconfirmed.
    pub fn run<V: ModalView + ?Sized>(&mut self, view: &mut V) -> Result<(), DialogError> {
        let shown = view.show(self);
        let closed = view.close();
        if matches!(self.state, PickerState::Cancelled) {
            tracing::info!("selection cancelled");
        }
        shown?;
        closed
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn result(&self) -> SelectionResult {
        self.state.result()
    }

    pub fn was_confirmed(&self) -> bool {
        matches!(self.state, PickerState::Confirmed(_))
    }

    pub fn label(&self) -> Option<&str> {
        match &self.state {
            PickerState::Confirmed(result) => result.label.as_deref(),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<i64> {
        match &self.state {
            PickerState::Confirmed(result) => result.id,
            _ => None,
        }
    }
}

/// A confirm that left the picker open with the field flagged.
fn confirm_rejected(confirming: bool, state: &PickerState) -> bool {
    confirming && state.is_invalid()
}
