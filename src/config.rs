//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration for the judgment search client, supporting TOML
//! files and environment variable overrides with validation and type-safe
//! access to all settings.
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables (`JUDGMENT_SEARCH_*`)
//! 2. Configuration files (TOML)
//! 3. Default values
//!
//! ## Usage
//! ```rust,no_run
//! use judgment_search_client::config::Config;
//!
//! let config = Config::from_file("config.toml").unwrap();
//! println!("Search API at {}", config.api.base_url);
//! ```

use crate::errors::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure containing all client settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search API connection settings
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Search API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the search service, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: 30,
            user_agent: "judgment-search-client/0.1".to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|e| SearchError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| SearchError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(base_url) = std::env::var("JUDGMENT_SEARCH_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("JUDGMENT_SEARCH_TIMEOUT_SECONDS") {
            self.api.timeout_seconds = timeout.parse().map_err(|_| SearchError::Config {
                message: "Invalid value in JUDGMENT_SEARCH_TIMEOUT_SECONDS".to_string(),
            })?;
        }
        if let Ok(level) = std::env::var("JUDGMENT_SEARCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(SearchError::ValidationFailed {
                field: "api.base_url".to_string(),
                reason: "Base URL cannot be empty".to_string(),
            });
        }

        if reqwest::Url::parse(&self.api.base_url).is_err() {
            return Err(SearchError::ValidationFailed {
                field: "api.base_url".to_string(),
                reason: format!("Not a valid URL: {}", self.api.base_url),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(SearchError::ValidationFailed {
                field: "api.timeout_seconds".to_string(),
                reason: "Timeout must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Initialize the global tracing subscriber from logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.clone()));

    if config.json_format {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(SearchError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parses_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://search.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://search.example.org");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
    }
}
