//! Path resolution for pomoclock configuration and log files.
//!
//! Everything lives in `~/.pomoclock/`:
//! - `config.yaml` - Configuration file
//! - `pomoclock.log` - Log output (the TUI owns the terminal)

use std::path::PathBuf;

use crate::error::PomoError;

/// Paths to pomoclock files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomoclock/`
    pub root: PathBuf,
    /// Config file: `~/.pomoclock/config.yaml`
    pub config_file: PathBuf,
    /// Default log file: `~/.pomoclock/pomoclock.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomoError> {
        let home = std::env::var("HOME")
            .map_err(|_| PomoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomoclock")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            log_file: root.join("pomoclock.log"),
            root,
        }
    }

    /// Use `config_file` instead of the default config location.
    #[must_use]
    pub fn with_config_file(mut self, config_file: PathBuf) -> Self {
        self.config_file = config_file;
        self
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".pomoclock")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pomoclock");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.log_file, root.join("pomoclock.log"));
    }

    #[test]
    fn test_with_config_file() {
        let paths = Paths::with_root(PathBuf::from("/tmp/p"))
            .with_config_file(PathBuf::from("/etc/pomoclock.yaml"));

        assert_eq!(paths.config_file, PathBuf::from("/etc/pomoclock.yaml"));
        assert_eq!(paths.log_file, PathBuf::from("/tmp/p/pomoclock.log"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
