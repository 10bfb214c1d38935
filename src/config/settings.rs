//! Configuration settings for pomoclock.
//!
//! Settings are loaded from `~/.pomoclock/config.yaml`. Timer lengths are not
//! part of the configuration: every run starts from 25 + 5.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Audible cue settings.
    pub audio: AudioConfig,
    /// Display settings.
    pub ui: UiConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Audible cue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AudioConfig {
    /// Play a cue when a phase ends.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Audio clip to play. The terminal bell is used when unset.
    #[serde(default)]
    pub sound_file: Option<PathBuf>,
    /// Command used to play `sound_file`.
    #[serde(default)]
    pub player: Option<String>,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Color output setting.
    #[serde(default)]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Whether the TUI should draw with colors.
    #[must_use]
    pub const fn tui_colors(self) -> bool {
        !matches!(self, Self::Never)
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to the log file. `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
    /// Log file. Defaults to `~/.pomoclock/pomoclock.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging.
    Off,
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Lifecycle events.
    Info,
    /// Everything including discarded ticks.
    Debug,
    /// Everything.
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

// Default value functions for serde
const fn default_true() -> bool {
    true
}

const fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            sound_file: None,
            player: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Log file to write to, falling back to the default location.
    #[must_use]
    pub fn log_file(&self, paths: &Paths) -> PathBuf {
        self.logging
            .file
            .clone()
            .unwrap_or_else(|| paths.log_file.clone())
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomoError::Parse(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
