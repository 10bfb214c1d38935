//! External-command audio player.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::debug;

use crate::audio::AudioCue;
use crate::error::PomoError;

/// Player command used when none is configured.
#[must_use]
pub const fn default_player() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else {
        "paplay"
    }
}

/// Plays an audio clip by spawning a player process.
///
/// Stopping kills the process, so the next play starts from the beginning.
#[derive(Debug)]
pub struct CommandPlayer {
    program: String,
    clip: PathBuf,
    child: Option<Child>,
}

impl CommandPlayer {
    /// Load the clip at `clip`, to be played with `program`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clip is not a readable file.
    pub fn load(program: impl Into<String>, clip: impl AsRef<Path>) -> Result<Self, PomoError> {
        let clip = clip.as_ref();
        if !clip.is_file() {
            return Err(PomoError::Audio(format!(
                "Sound file {} not found",
                clip.display()
            )));
        }

        Ok(Self {
            program: program.into(),
            clip: clip.to_path_buf(),
            child: None,
        })
    }

    /// Path of the loaded clip.
    #[must_use]
    pub fn clip(&self) -> &Path {
        &self.clip
    }

    /// Whether a player process is still running.
    pub fn is_playing(&mut self) -> bool {
        match self.child.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(Ok(Some(_)) | Err(_)) => {
                self.child = None;
                false
            }
            None => false,
        }
    }
}

impl AudioCue for CommandPlayer {
    fn play(&mut self) -> Result<(), PomoError> {
        if self.is_playing() {
            return Ok(());
        }

        let child = Command::new(&self.program)
            .arg(&self.clip)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PomoError::Audio(format!("Failed to run {}: {e}", self.program)))?;

        debug!("playing {} with {}", self.clip.display(), self.program);
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PomoError> {
        if let Some(mut child) = self.child.take() {
            // Exited already is fine; the clip is over either way.
            let _ = child.kill();
            child
                .wait()
                .map_err(|e| PomoError::Audio(format!("Failed to stop {}: {e}", self.program)))?;
        }
        Ok(())
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_clip() {
        let err = CommandPlayer::load("true", "/no/such/clip.wav").unwrap_err();
        assert!(matches!(err, PomoError::Audio(_)));
    }

    #[test]
    fn test_load_existing_clip() {
        let clip = NamedTempFile::new().unwrap();
        let player = CommandPlayer::load("true", clip.path()).unwrap();
        assert_eq!(player.clip(), clip.path());
    }

    #[cfg(unix)]
    #[test]
    fn test_play_then_stop() {
        let clip = NamedTempFile::new().unwrap();
        let mut player = CommandPlayer::load("true", clip.path()).unwrap();

        player.play().unwrap();
        player.stop().unwrap();
        assert!(!player.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn test_play_while_playing_keeps_clip_running() {
        use std::io::Write;

        // `sh <clip>` stands in for a player busy with a long clip
        let mut clip = NamedTempFile::new().unwrap();
        writeln!(clip, "sleep 5").unwrap();
        clip.flush().unwrap();
        let mut player = CommandPlayer::load("sh", clip.path()).unwrap();

        player.play().unwrap();
        assert!(player.is_playing());
        let first = player.child.as_ref().map(Child::id);

        player.play().unwrap();
        assert!(player.is_playing());
        assert_eq!(player.child.as_ref().map(Child::id), first);

        player.stop().unwrap();
        assert!(!player.is_playing());
        assert!(player.child.is_none());
    }

    #[test]
    fn test_play_unknown_program() {
        let clip = NamedTempFile::new().unwrap();
        let mut player = CommandPlayer::load("pomoclock-no-such-player", clip.path()).unwrap();

        assert!(matches!(player.play(), Err(PomoError::Audio(_))));
    }

    #[test]
    fn test_stop_without_play() {
        let clip = NamedTempFile::new().unwrap();
        let mut player = CommandPlayer::load("true", clip.path()).unwrap();
        assert!(player.stop().is_ok());
    }
}
