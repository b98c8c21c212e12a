//! Unified path management for Huddle configuration and logs.
//!
//! All paths live under one per-user config directory so portable installs
//! can relocate everything with a single `HUDDLE_CONFIG_DIR` override.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/huddle/            # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── huddle-desktop.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Huddle.
pub struct HuddlePaths;

impl HuddlePaths {
    /// Returns the Huddle configuration directory.
    ///
    /// `HUDDLE_CONFIG_DIR` overrides the platform default
    /// (`~/.config/huddle` on Linux).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        if let Ok(dir) = std::env::var("HUDDLE_CONFIG_DIR")
            && !dir.trim().is_empty()
        {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join("huddle"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
