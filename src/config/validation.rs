//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{CampusError, Result};
use super::{BackendKind, Settings};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;
    validate_school_config(&settings.school)?;

    Ok(())
}

/// Validate storage configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.backend == BackendKind::Json && config.data_dir.trim().is_empty() {
        return Err(CampusError::Config(
            "Data directory is required for the json backend".to_string()
        ));
    }

    if config.backend == BackendKind::Memory && config.persist_on_write {
        tracing::warn!("persist_on_write has no lasting effect with the memory backend");
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CampusError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CampusError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(directory) = &config.directory {
        if directory.trim().is_empty() {
            return Err(CampusError::Config(
                "Log directory must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate school policy configuration
fn validate_school_config(config: &super::SchoolConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(CampusError::Config(
            "School name is required".to_string()
        ));
    }

    let threshold = config.attendance_warning_threshold;
    if !(0.0..=100.0).contains(&threshold) {
        return Err(CampusError::Config(
            format!("Attendance warning threshold must be within 0..=100, got {}", threshold)
        ));
    }

    if config.min_password_length == 0 {
        return Err(CampusError::Config(
            "Minimum password length must be greater than 0".to_string()
        ));
    }

    Ok(())
}
