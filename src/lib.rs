//! CampusHub school portal
//!
//! Role-based management of users, class schedules, course events,
//! attendance and a discussion forum over a pluggable data source.
//! This library provides the models, the aggregation engine that turns flat
//! records into display-ready groupings, and the services in front of them.

#![allow(non_snake_case)]

pub mod aggregation;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
