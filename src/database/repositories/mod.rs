//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod catalog;
pub mod schedule;
pub mod event;
pub mod attendance;
pub mod forum;

// Re-export repositories
pub use user::UserRepository;
pub use catalog::CatalogRepository;
pub use schedule::ScheduleRepository;
pub use event::EventRepository;
pub use attendance::AttendanceRepository;
pub use forum::ForumRepository;
