//! Configuration loading.
//!
//! Configuration lives in `<config_dir>/cinescope/config.toml`. Every
//! field has a default, so a missing file is not an error. The service
//! credential is resolved separately, on demand (see [`credentials`]).

mod credentials;

pub use credentials::{CredentialStatus, SecureString, CREDENTIAL_ENV_VAR};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Category, Language};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Connection settings for the remote catalog service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Base URL of the catalog query API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL posters are served from, including the size segment.
    #[serde(default = "default_poster_base_url")]
    pub poster_base_url: String,
    /// API key; the `TMDB_API_KEY` environment variable takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

/// Starting browse position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Language code the first fetch uses.
    #[serde(default = "default_language")]
    pub language: String,
    /// Category key the first fetch uses.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_poster_base_url() -> String {
    "https://image.tmdb.org/t/p/w342".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_request_timeout() -> u32 {
    30
}

fn default_language() -> String {
    "en".to_string()
}

fn default_category() -> String {
    "popular".to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poster_base_url: default_poster_base_url(),
            api_key: None,
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            category: default_category(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            defaults: Defaults::default(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cinescope/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cinescope").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalog base URL is non-empty.
    /// - Timeouts are positive.
    /// - The default category and language name known values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "catalog.base_url must not be empty".to_string(),
            });
        }

        if self.catalog.connect_timeout_seconds == 0 || self.catalog.request_timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                message: "catalog timeouts must be positive".to_string(),
            });
        }

        if Category::from_key(&self.defaults.category).is_none() {
            return Err(ConfigError::Validation {
                message: format!("unknown default category '{}'", self.defaults.category),
            });
        }

        if Language::from_code(&self.defaults.language).is_none() {
            return Err(ConfigError::Validation {
                message: format!("unsupported default language '{}'", self.defaults.language),
            });
        }

        Ok(())
    }
}
