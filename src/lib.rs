pub mod candidates;
pub mod cli;
pub mod config;
pub mod dialog;
pub mod error;
pub mod logging;
pub mod ui;

pub use candidates::Candidate;
pub use dialog::{ModalView, SelectionDialog, SelectionResult};
pub use error::DialogError;
