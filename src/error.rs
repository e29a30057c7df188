use thiserror::Error;

use crate::candidates::CandidateError;
use crate::config::ConfigError;

/// Errors that can end a picker session before the user decides.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid candidates: {0}")]
    Candidates(#[from] CandidateError),

    /// Terminal setup, drawing or event reading failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
