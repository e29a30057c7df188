//! Project candidates offered by the picker and the ways callers supply them.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// A selectable project: its id and the name shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    #[serde(alias = "label")]
    pub name: String,
}

impl Candidate {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("Expected ID=NAME, got '{0}'")]
    MissingSeparator(String),

    #[error("Project id '{id}' is not an integer")]
    InvalidId {
        id: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Project {id} has an empty name")]
    EmptyName { id: i64 },

    #[error("Failed to read projects from '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse projects from '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parses the `ID=NAME` form used by `--project`. Only the first `=` splits.
impl FromStr for Candidate {
    type Err = CandidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, name) = s
            .split_once('=')
            .ok_or_else(|| CandidateError::MissingSeparator(s.to_string()))?;
        let id = id.trim();
        let id = id.parse::<i64>().map_err(|source| CandidateError::InvalidId {
            id: id.to_string(),
            source,
        })?;
        if name.is_empty() {
            return Err(CandidateError::EmptyName { id });
        }
        Ok(Candidate::new(id, name))
    }
}

/// Reads a JSON array of candidates from `path`, or from stdin when `path` is `-`.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>, CandidateError> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CandidateError::ReadError {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CandidateError::ReadError {
            path: path.to_path_buf(),
            source,
        })?
    };
    parse_candidates(&content, path)
}

fn parse_candidates(content: &str, origin: &Path) -> Result<Vec<Candidate>, CandidateError> {
    let candidates: Vec<Candidate> =
        serde_json::from_str(content).map_err(|source| CandidateError::ParseError {
            path: origin.to_path_buf(),
            source,
        })?;
    if let Some(empty) = candidates.iter().find(|c| c.name.is_empty()) {
        return Err(CandidateError::EmptyName { id: empty.id });
    }
    tracing::debug!(count = candidates.len(), "Loaded candidates from {}", origin.display());
    Ok(candidates)
}
