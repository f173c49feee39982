// Log-file setup. The TUI owns the terminal, so events never go to stdout.

use crate::errors::{Result, SortError};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_FILTER`] when they are missing or malformed
fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber appending to `log_file`.
///
/// With no file, nothing is installed and every `tracing` event is dropped.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(filter_from(directives.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| SortError::Logging {
            message: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
