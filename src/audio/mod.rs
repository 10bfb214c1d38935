//! The audible cue played when a phase ends.
//!
//! The clock knows nothing about sound. The widget listens for phase
//! transitions and resets and drives an [`AudioCue`] in response.

mod bell;
mod player;

pub use bell::TerminalBell;
pub use player::{default_player, CommandPlayer};

use log::warn;

use crate::config::AudioConfig;
use crate::error::PomoError;

/// A playable, rewindable audio clip.
#[cfg_attr(test, mockall::automock)]
pub trait AudioCue {
    /// Start playback from the current position.
    ///
    /// # Errors
    ///
    /// Returns an error if playback cannot be started.
    fn play(&mut self) -> Result<(), PomoError>;

    /// Halt playback and rewind to the start.
    ///
    /// # Errors
    ///
    /// Returns an error if playback cannot be halted.
    fn stop(&mut self) -> Result<(), PomoError>;
}

impl<A: AudioCue + ?Sized> AudioCue for Box<A> {
    fn play(&mut self) -> Result<(), PomoError> {
        (**self).play()
    }

    fn stop(&mut self) -> Result<(), PomoError> {
        (**self).stop()
    }
}

/// Build the audio cue described by `config`.
///
/// Returns `None` when audio is disabled. A clip that fails to load falls
/// back to the terminal bell.
#[must_use]
pub fn from_config(config: &AudioConfig) -> Option<Box<dyn AudioCue>> {
    if !config.enabled {
        return None;
    }

    let Some(clip) = &config.sound_file else {
        return Some(Box::new(TerminalBell::stdout()));
    };

    let program = config
        .player
        .clone()
        .unwrap_or_else(|| default_player().to_string());

    match CommandPlayer::load(program, clip) {
        Ok(player) => Some(Box::new(player)),
        Err(e) => {
            warn!("{e}; falling back to the terminal bell");
            Some(Box::new(TerminalBell::stdout()))
        }
    }
}
