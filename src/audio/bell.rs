//! Terminal bell cue.

use std::io::{self, Write};

use crate::audio::AudioCue;
use crate::error::PomoError;

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell.
///
/// A bell has no playback position, so stopping is a no-op.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    /// Bell on standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    /// Bell on the given writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the bell, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioCue for TerminalBell<W> {
    fn play(&mut self) -> Result<(), PomoError> {
        self.out
            .write_all(BEL)
            .and_then(|()| self.out.flush())
            .map_err(|e| PomoError::Audio(format!("Failed to ring bell: {e}")))
    }

    fn stop(&mut self) -> Result<(), PomoError> {
        Ok(())
    }
}
