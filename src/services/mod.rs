//! Services module
//!
//! This module contains business logic services

pub mod attendance;
pub mod auth;
pub mod event;
pub mod forum;
pub mod schedule;
pub mod user;

// Re-export commonly used services
pub use attendance::AttendanceService;
pub use auth::{AuthService, Credentials, LoginResponse, Permission};
pub use event::EventService;
pub use forum::ForumService;
pub use schedule::ScheduleService;
pub use user::UserService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    database: DatabaseService,
    pub user_service: UserService,
    pub schedule_service: ScheduleService,
    pub event_service: EventService,
    pub attendance_service: AttendanceService,
    pub forum_service: ForumService,
    pub auth_service: AuthService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one store
    pub fn new(database: DatabaseService, settings: Settings) -> Self {
        Self {
            user_service: UserService::new(database.clone(), settings.clone()),
            schedule_service: ScheduleService::new(database.clone()),
            event_service: EventService::new(database.clone()),
            attendance_service: AttendanceService::new(database.clone(), settings),
            forum_service: ForumService::new(database.clone()),
            auth_service: AuthService::new(database.clone()),
            database,
        }
    }

    pub fn database(&self) -> &DatabaseService {
        &self.database
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let pool = self.database.pool();
        let storage_healthy = match pool.health_check() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Storage health check failed");
                false
            }
        };
        let catalog_loaded = self
            .database
            .catalog
            .list_courses()
            .await
            .map(|courses| !courses.is_empty())
            .unwrap_or(false);

        ServiceHealthStatus {
            storage_backend: pool.backend_name().to_string(),
            storage_healthy,
            catalog_loaded,
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub storage_backend: String,
    pub storage_healthy: bool,
    pub catalog_loaded: bool,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.storage_healthy
    }

    /// Get list of problems found
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.storage_healthy {
            issues.push(format!("Storage backend '{}' is unreachable", self.storage_backend));
        }
        if !self.catalog_loaded {
            issues.push("Course catalog is empty".to_string());
        }

        issues
    }
}
