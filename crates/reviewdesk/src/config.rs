//! Configuration management for reviewdesk.
//!
//! This module provides configuration loading and validation using figment,
//! supporting a TOML config file, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::form::DEFAULT_EXPORT_FILE;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "reviewdesk";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "new_customer_service.db";

/// Default log file name for the interactive form.
const LOG_FILE_NAME: &str = "reviewdesk.log";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `REVIEWDESK_`, nested with `__`)
/// 2. TOML config file at `~/.config/reviewdesk/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Export configuration.
    pub export: ExportConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/reviewdesk/new_customer_service.db`
    pub database_path: Option<PathBuf>,
}

/// Export-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File written by the Export action, relative to the working directory
    /// unless absolute.
    pub csv_path: PathBuf,
}

/// Logging-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file used while the interactive form owns the terminal.
    /// Defaults to `~/.local/share/reviewdesk/reviewdesk.log`
    pub log_file: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("REVIEWDESK_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.export.csv_path.as_os_str().is_empty() {
            return Err(Error::config_validation("export.csv_path must not be empty"));
        }

        if self.export.csv_path == self.database_path() {
            return Err(Error::config_validation(format!(
                "export.csv_path ({}) must differ from the database path",
                self.export.csv_path.display()
            )));
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the export path.
    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.export.csv_path.clone()
    }

    /// Get the log file path, resolving defaults if not set.
    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        self.logging
            .log_file
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(LOG_FILE_NAME))
    }
}
