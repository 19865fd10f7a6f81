//! Application configuration
//!
//! Loaded from a TOML file, with the OpenWeatherMap API key overridable
//! via the `OWM_API_KEY` environment variable so the secret does not have
//! to live on disk.

mod database;

use std::path::Path;

use integration_owm::OwmConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use database::DatabaseConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Environment variable overriding `weather.api_key`
const API_KEY_ENV: &str = "OWM_API_KEY";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML of the expected shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required value is missing after all sources were applied
    #[error("Missing required config value: {0}")]
    MissingValue(&'static str),
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// OpenWeatherMap provider settings
    pub weather: OwmConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read or parsed, or
    /// when no API key is present in either the file or the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration");

        let raw = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&raw)?;
        config.apply_env_overrides();
        config.validate()?;

        info!(database = %config.database.path, "Configuration loaded");
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                debug!("Overriding weather API key from environment");
                self.weather.api_key = key;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.api_key.is_empty() {
            return Err(ConfigError::MissingValue("weather.api_key"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_minimal_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [weather]
            api_key = "secret"
            "#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.weather.api_key, "secret");
        assert_eq!(config.database.path, "weatherbot.db");
        assert!(config.database.run_migrations);
    }

    #[test]
    fn load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [database]
            path = "/tmp/bot.db"
            max_connections = 2
            run_migrations = false

            [weather]
            api_key = "secret"
            timeout_secs = 10
            units = "metric"
            "#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.database.path, "/tmp/bot.db");
        assert_eq!(config.database.max_connections, 2);
        assert!(!config.database.run_migrations);
        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [weather]
            api_key = ""
            "#
        )
        .unwrap();

        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::MissingValue(_))));
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let result = AppConfig::load("/nonexistent/weatherbot.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
