//! Error handling for CampusHub
//!
//! This module defines the main error type used throughout the library
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for CampusHub
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: i64 },

    #[error("Schedule not found: {schedule_id}")]
    ScheduleNotFound { schedule_id: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Attendance record not found: {record_id}")]
    AttendanceNotFound { record_id: i64 },

    #[error("Post not found: {post_id}")]
    PostNotFound { post_id: i64 },

    #[error("Comment not found: {comment_id} on post {post_id}")]
    CommentNotFound { post_id: i64, comment_id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CampusHub operations
pub type Result<T> = std::result::Result<T, CampusError>;

impl From<config::ConfigError> for CampusError {
    fn from(err: config::ConfigError) -> Self {
        CampusError::Config(err.to_string())
    }
}

impl CampusError {
    /// True for every "entity does not exist" variant
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CampusError::UserNotFound { .. }
                | CampusError::CourseNotFound { .. }
                | CampusError::ScheduleNotFound { .. }
                | CampusError::EventNotFound { .. }
                | CampusError::AttendanceNotFound { .. }
                | CampusError::PostNotFound { .. }
                | CampusError::CommentNotFound { .. }
        )
    }

    /// Whether a startup or batch step may skip this failure and carry on
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CampusError::Config(_) | CampusError::Storage(_) | CampusError::Io(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CampusError::Config(_) => ErrorSeverity::Critical,
            CampusError::Storage(_) => ErrorSeverity::Critical,
            CampusError::Io(_) => ErrorSeverity::Error,
            CampusError::Serialization(_) => ErrorSeverity::Error,
            CampusError::PermissionDenied(_) => ErrorSeverity::Warning,
            CampusError::Authentication(_) => ErrorSeverity::Warning,
            CampusError::InvalidInput(_) => ErrorSeverity::Info,
            _ if self.is_not_found() => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Message suitable for showing to the person who triggered the operation
    pub fn user_message(&self) -> String {
        match self {
            CampusError::InvalidInput(msg) => msg.clone(),
            CampusError::Authentication(_) => "Invalid credentials".to_string(),
            CampusError::PermissionDenied(msg) => msg.clone(),
            e if e.is_not_found() => e.to_string(),
            _ => "Something went wrong, please try again".to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
