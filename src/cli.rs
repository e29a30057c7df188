use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use crate::candidates::{load_candidates, Candidate};
use crate::config::{Config, OutputFormat};
use crate::dialog::SelectionResult;
use crate::error::DialogError;

#[derive(Debug, Parser)]
#[command(name = "projpick", version, about = "Pick an existing project or name a new one")]
pub struct Cli {
    /// JSON file with `[{"id": 1, "name": "..."}]`; `-` reads stdin.
    #[arg(long, value_name = "FILE")]
    pub projects: Option<PathBuf>,

    /// Add a candidate as ID=NAME. Repeatable; listed after --projects entries.
    #[arg(short = 'p', long = "project", value_name = "ID=NAME")]
    pub project: Vec<Candidate>,

    /// Name pre-filled in the input field.
    #[arg(short, long, value_name = "NAME", default_value = "")]
    pub default: String,

    /// Popup title. Overrides the config file.
    #[arg(long)]
    pub title: Option<String>,

    /// Output format. Overrides the config file.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file path (default: platform config dir).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file base path (also `PROJPICK_LOG`).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Candidates from `--projects` followed by `--project` flags.
    pub fn candidates(&self) -> Result<Vec<Candidate>, DialogError> {
        let mut candidates = match &self.projects {
            Some(path) => load_candidates(path)?,
            None => Vec::new(),
        };
        candidates.extend(self.project.iter().cloned());
        Ok(candidates)
    }

    /// Loads the config file and applies flag overrides.
    pub fn resolve_config(&self) -> Result<Config, DialogError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(title) = &self.title {
            config.dialog.title = title.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Writes a confirmed result in the requested format. Unconfirmed results write nothing.
pub fn write_result<W: Write>(
    out: &mut W,
    result: &SelectionResult,
    format: OutputFormat,
) -> std::io::Result<()> {
    if !result.confirmed {
        return Ok(());
    }
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, result)?;
            writeln!(out)
        }
        OutputFormat::Plain => {
            let id = result.id.map(|id| id.to_string()).unwrap_or_default();
            writeln!(out, "{}\t{}", id, result.label.as_deref().unwrap_or_default())
        }
    }
}
