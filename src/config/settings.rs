//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from a config file and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub school: SchoolConfig,
}

/// Which storage backend to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Memory,
    Json,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: BackendKind,
    pub data_dir: String,
    pub persist_on_write: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<String>,
    pub json: bool,
}

/// School-wide policy knobs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchoolConfig {
    pub name: String,
    /// Percentage below which a student is flagged in attendance reports
    pub attendance_warning_threshold: f64,
    pub min_password_length: usize,
}

impl Settings {
    /// Load settings from configuration file and environment variables.
    ///
    /// Defaults are layered first so a partial file or a handful of
    /// `CAMPUSHUB__SECTION__KEY` variables is enough.
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();
        let settings = config::Config::builder()
            .set_default("storage.backend", "json")?
            .set_default("storage.data_dir", defaults.storage.data_dir)?
            .set_default("storage.persist_on_write", defaults.storage.persist_on_write)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .set_default("school.name", defaults.school.name)?
            .set_default("school.attendance_warning_threshold", defaults.school.attendance_warning_threshold)?
            .set_default("school.min_password_length", defaults.school.min_password_length as i64)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CAMPUSHUB").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CampusError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: BackendKind::Json,
                data_dir: "data".to_string(),
                persist_on_write: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                json: false,
            },
            school: SchoolConfig {
                name: "CampusHub".to_string(),
                attendance_warning_threshold: 75.0,
                min_password_length: 6,
            },
        }
    }
}
