//! Database module
//!
//! This module handles the data source: backends, the shared store and
//! the per-entity repositories over it

pub mod backend;
pub mod connection;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use backend::{Dataset, StorageBackend, MemoryBackend, JsonFileBackend};
pub use connection::{DatabasePool, Store, open_store};
pub use repositories::{UserRepository, CatalogRepository, ScheduleRepository, EventRepository, AttendanceRepository, ForumRepository};
pub use service::{DatabaseService, DatasetStats};
