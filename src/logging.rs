use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file base path.
pub const LOG_ENV: &str = "PROJPICK_LOG";

/// Initialize tracing with optional file output.
///
/// The picker owns the terminal, so nothing is logged unless a log path is
/// given (argument first, then `PROJPICK_LOG`). The file name gets a
/// `.{timestamp}.{pid}` suffix so concurrent pickers do not share a file.
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_tracing(log_path: Option<&Path>) {
    let base = match log_path {
        Some(path) => path.display().to_string(),
        None => match std::env::var(LOG_ENV) {
            Ok(path) if !path.is_empty() => path,
            _ => return,
        },
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", base, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
