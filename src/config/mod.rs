mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DialogConfig, OutputConfig, OutputFormat, DEFAULT_ERROR_TOOLTIP};
