//! Unified path management for Work On configuration files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Work On.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/workon/            # Config directory
/// ├── config.toml              # Portal configuration (backend URL, etc.)
/// └── secret.json              # API keys and secrets
/// ```
pub struct WorkonPaths;

impl WorkonPaths {
    /// Returns the Work On configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/workon/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("workon"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the secret file (`secret.json`).
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the path to the portal configuration file (`config.toml`).
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
