//! Portal configuration loaded from `config.toml`.

use crate::paths::WorkonPaths;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Default base URL of the intranet backend.
const DEFAULT_BACKEND_URL: &str = "http://localhost:3000/api";

/// Environment variable overriding the backend base URL.
const BACKEND_URL_ENV: &str = "WORKON_BACKEND_URL";

/// Errors that can occur while loading the portal configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// File I/O error.
    IoError(std::io::Error),
    /// TOML parsing error.
    TomlParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
            ConfigError::TomlParseError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::TomlParseError(e)
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the intranet backend REST API
    pub base_url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub backend: BackendSettings,
}

impl PortalConfig {
    /// Loads the configuration from a specific path.
    ///
    /// A missing file is not an error: defaults apply.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// Priority: `WORKON_BACKEND_URL` environment variable, then
    /// `~/.config/workon/config.toml`, then built-in defaults.
    pub fn resolve() -> Self {
        let mut config = WorkonPaths::config_file()
            .ok()
            .and_then(|path| match Self::load_from(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("[PortalConfig] failed to load config.toml: {e}");
                    None
                }
            })
            .unwrap_or_default();

        if let Ok(url) = env::var(BACKEND_URL_ENV) {
            if !url.is_empty() {
                config.backend.base_url = url;
            }
        }

        config
    }
}
