//! Path management for aurum configuration files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform configuration directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves where aurum keeps its files.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/aurum/        # Config directory (platform dependent)
/// └── config.toml         # Storefront configuration
/// ```
pub struct AurumPaths;

impl AurumPaths {
    const APP_DIR: &'static str = "aurum";

    /// Returns the aurum configuration directory (e.g., `~/.config/aurum/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
