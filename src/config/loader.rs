use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `backend.url`.
pub const URL_ENV_VAR: &str = "DONORLINK_URL";
/// Environment variable overriding `backend.anon_key`.
pub const ANON_KEY_ENV_VAR: &str = "DONORLINK_ANON_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/donorlink/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("donorlink").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`, applies environment overrides and validates.
    ///
    /// A missing file is not an error: defaults are used, so a backend can be
    /// configured through the environment alone.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Config::default()
        };

        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Applies `DONORLINK_URL` / `DONORLINK_ANON_KEY` overrides.
    ///
    /// The lookup is injected so tests don't have to mutate the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.backend.url = url.trim().to_string();
        }
        if let Some(key) = lookup(ANON_KEY_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            self.backend.anon_key = Some(key.trim().to_string());
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The backend URL parses and uses http or https
    /// - An anon key is present
    /// - Bucket names are not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.backend.url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid backend url '{}': {}", self.backend.url, e),
            }
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::ValidationError {
                message: format!("Backend url must be http or https, got '{}'", url.scheme()),
            });
        }

        if self.backend.anon_key.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "backend.anon_key is not set (set it in the config file or {})",
                    ANON_KEY_ENV_VAR
                ),
            });
        }

        if self.storage.orphanage_images_bucket.is_empty() || self.storage.avatars_bucket.is_empty()
        {
            return Err(ConfigError::ValidationError {
                message: "Storage bucket names must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
