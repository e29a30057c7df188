use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Tooltip shown under the name field when confirm finds nothing to report.
pub const DEFAULT_ERROR_TOOLTIP: &str = "Error occurred with the data of the control.";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dialog: DialogConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Appearance of the picker popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Popup title (default: "Select Project").
    #[serde(default = "default_title")]
    pub title: String,
    /// Explanation shown when the name field is flagged.
    #[serde(default = "default_error_tooltip")]
    pub error_tooltip: String,
    /// Number of candidate rows visible before the list scrolls (default: 8).
    #[serde(default = "default_visible_rows")]
    pub visible_rows: usize,
}

/// How the confirmed selection is written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Serialized selection result.
    #[default]
    Json,
    /// `ID<TAB>NAME`, id left empty for a typed name.
    Plain,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            error_tooltip: default_error_tooltip(),
            visible_rows: default_visible_rows(),
        }
    }
}

fn default_title() -> String {
    "Select Project".to_string()
}

fn default_error_tooltip() -> String {
    DEFAULT_ERROR_TOOLTIP.to_string()
}

fn default_visible_rows() -> usize {
    8
}
