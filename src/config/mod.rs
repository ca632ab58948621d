//! Configuration management for Newsdesk.
//!
//! Configuration is read from `~/.config/newsdesk/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! `NEWSDESK_API_KEY` in the environment takes precedence over `api.api_key`.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::transport::DEFAULT_PAGE_SIZE;

pub const API_KEY_ENV: &str = "NEWSDESK_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.newsdatahub.com/";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

/// News API connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Articles requested per page (default: 40)
    pub page_size: u32,
    /// Request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
    /// Serve the built-in sample feed instead of calling the API
    pub offline: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: None,
            user_agent: concat!("newsdesk/", env!("CARGO_PKG_VERSION")).to_string(),
            offline: false,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::read(path)?
        } else {
            Self::create_default_config(path)?;
            Self::default()
        };
        config.apply_env(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Overlay the API key from the environment, ignoring blank values.
    pub fn apply_env(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api.api_key = Some(key);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.api.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.api.base_url.clone(),
            source: e,
        })?;
        if self.api.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(())
    }

    /// Get the default config file path: `~/.config/newsdesk/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("newsdesk").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Newsdesk Configuration

[api]
# News API endpoint root; requests go to <base_url>v1/news
base_url = "https://api.newsdatahub.com/"

# API key sent as the x-api-key header.
# Prefer the NEWSDESK_API_KEY environment variable over storing it here.
# api_key = ""

# Articles per page
page_size = 40

# Request timeout in seconds (unset: wait for the server indefinitely)
# timeout_secs = 30

# Serve a built-in sample feed instead of calling the API
offline = false
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid base_url {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("page_size must be at least 1")]
    InvalidPageSize,
}
