//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for CampusHub.

use tracing::{info, warn, debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{CampusError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard must be kept alive for the file writer to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| CampusError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "campus-hub.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CampusError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: &str, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log an attendance submission for a course
pub fn log_attendance_submission(course_id: i64, date: &str, present: usize, total: usize) {
    info!(
        course_id = course_id,
        date = date,
        present = present,
        total = total,
        "Attendance submitted"
    );
}

/// Log store operations
pub fn log_store_operation(operation: &str, backend: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            backend = backend,
            duration_ms = duration_ms,
            "Store operation completed"
        );
    } else {
        error!(
            operation = operation,
            backend = backend,
            duration_ms = duration_ms,
            "Store operation failed"
        );
    }
}

/// Log a mutation its closure refused; nothing reached the backend
pub fn log_store_rejection(operation: &str, backend: &str, reason: &CampusError) {
    debug!(
        operation = operation,
        backend = backend,
        reason = %reason,
        "Store operation rejected"
    );
}
