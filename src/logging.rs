//! Log setup.
//!
//! The TUI owns the terminal, so log records go to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::LogLevel;
use crate::error::PomoError;

/// Environment variable that overrides the configured level.
pub const LOG_ENV: &str = "RUST_LOG";

/// Install the global logger writing to `file`.
///
/// Does nothing when the level is `off` and `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already
/// installed.
pub fn init(level: LogLevel, file: &Path) -> Result<(), PomoError> {
    if level == LogLevel::Off && std::env::var_os(LOG_ENV).is_none() {
        return Ok(());
    }

    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let sink = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map_err(|e| PomoError::Config(format!("Failed to open log file {}: {e}", file.display())))?;

    Builder::new()
        .filter_level(LevelFilter::from(level))
        .parse_env(LOG_ENV)
        .target(Target::Pipe(Box::new(sink)))
        .format_timestamp_secs()
        .try_init()
        .map_err(|e| PomoError::Config(format!("Failed to install logger: {e}")))
}
