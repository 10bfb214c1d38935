//! Error types for pomoclock.

use thiserror::Error;

/// Errors raised at the edges of the application.
///
/// The clock itself is infallible; these cover configuration, the terminal,
/// and the audio collaborator.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be located, read, or validated.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// The audio clip could not be loaded or played.
    #[error("audio error: {0}")]
    Audio(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PomoError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Parse(_) => 2,
            Self::Terminal(_) | Self::Audio(_) | Self::Io(_) => 1,
        }
    }
}
