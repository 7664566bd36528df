//! # Configuration Management for travelstore
//!
//! This crate provides the configuration structures for the travelstore data
//! layer: the database pool and the logging setup.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{DatabaseConfig, LoggingConfig};
//!
//! let db_config = DatabaseConfig::new(
//!     "sqlite://travelstore.db".to_string(),
//!     1, 5, 30, 600, 3600,
//! );
//! let test_config = DatabaseConfig::in_memory();
//! let logging = LoggingConfig::default();
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [database]
//! url = "sqlite://travelstore.db?mode=rwc"
//! min_connections = 1
//! max_connections = 5
//! connection_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! max_lifetime_seconds = 3600
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from the file named by TRAVELSTORE_CONFIG, or ./travelstore.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./travelstore.toml";
const CONFIG_PATH_VAR: &str = "TRAVELSTORE_CONFIG";
const DATABASE_URL_VAR: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL, e.g. `sqlite://travelstore.db?mode=rwc` or `sqlite::memory:`
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
    pub connection_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    pub max_lifetime_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e.into());
            }
        }

        let mut config = if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::parse_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::parse_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }?;

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// `DATABASE_URL` replaces the configured database URL
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        match env::var(DATABASE_URL_VAR) {
            Ok(url) => {
                self.database.url = url;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Logging level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Create a new database configuration
    pub fn new(
        url: String,
        min_connections: u32,
        max_connections: u32,
        connection_timeout_seconds: u64,
        idle_timeout_seconds: u64,
        max_lifetime_seconds: u64,
    ) -> Self {
        Self {
            url,
            min_connections,
            max_connections,
            connection_timeout_seconds,
            idle_timeout_seconds,
            max_lifetime_seconds,
        }
    }

    /// Private in-memory database. A single connection keeps every query on
    /// the same database.
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:".to_string(), 1, 1, 30, 600, 3600)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Database url cannot be empty".to_string(),
            ));
        }
        if self.min_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database min_connections must be greater than 0".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "Database max_connections must be greater than 0".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::Invalid(
                "Database min_connections cannot be greater than max_connections".to_string(),
            ));
        }
        if self.connection_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Database connection_timeout_seconds must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
