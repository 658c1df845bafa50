//! Database service layer
//!
//! This module provides a high-level interface to the repositories and the
//! cross-entity checks that span more than one collection

use serde::Serialize;
use crate::database::{DatabasePool, UserRepository, CatalogRepository, ScheduleRepository, EventRepository, AttendanceRepository, ForumRepository};
use crate::models::*;
use crate::utils::errors::{CampusError, Result};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub users: UserRepository,
    pub catalog: CatalogRepository,
    pub schedules: ScheduleRepository,
    pub events: EventRepository,
    pub attendance: AttendanceRepository,
    pub forum: ForumRepository,
}

/// Collection sizes, for the startup summary and admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub admins: usize,
    pub teachers: usize,
    pub students: usize,
    pub suspended_users: usize,
    pub courses: usize,
    pub sessions: usize,
    pub schedules: usize,
    pub events: usize,
    pub attendance_records: usize,
    pub forum_posts: usize,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            catalog: CatalogRepository::new(pool.clone()),
            schedules: ScheduleRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            attendance: AttendanceRepository::new(pool.clone()),
            forum: ForumRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// The user with `id`, which must hold the teacher role
    pub async fn require_teacher(&self, id: &str) -> Result<User> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CampusError::UserNotFound { user_id: id.to_string() })?;

        if user.kind() != RoleKind::Teacher {
            return Err(CampusError::InvalidInput(format!("User {} is not a teacher", id)));
        }
        Ok(user)
    }

    /// Fails unless `session` is a known cohort
    pub async fn require_session(&self, session: &str) -> Result<()> {
        if self.catalog.session_exists(session).await? {
            Ok(())
        } else {
            Err(CampusError::InvalidInput(format!("Unknown session: {}", session)))
        }
    }

    /// Student profiles enrolled in `session`, suspended students included
    pub async fn students_in_session(&self, session: &str) -> Result<Vec<StudentProfile>> {
        let filter = UserFilter {
            role: Some(RoleKind::Student),
            session: Some(session.to_string()),
            include_suspended: true,
        };
        Ok(self
            .users
            .list(&filter)
            .await?
            .into_iter()
            .filter_map(|u| u.student_profile().cloned())
            .collect())
    }

    /// All student profiles
    pub async fn student_roster(&self) -> Result<Vec<StudentProfile>> {
        Ok(self
            .users
            .list(&UserFilter::role(RoleKind::Student))
            .await?
            .into_iter()
            .filter_map(|u| u.student_profile().cloned())
            .collect())
    }

    /// Get system statistics
    pub async fn get_system_stats(&self) -> Result<DatasetStats> {
        Ok(self
            .pool
            .query("stats", |data| {
                let mut stats = DatasetStats {
                    courses: data.courses.len(),
                    sessions: data.sessions.len(),
                    schedules: data.schedules.len(),
                    events: data.events.len(),
                    attendance_records: data.attendance.len(),
                    forum_posts: data.forum.len(),
                    ..Default::default()
                };
                for stored in &data.users {
                    match stored.user.kind() {
                        RoleKind::Admin => stats.admins += 1,
                        RoleKind::Teacher => stats.teachers += 1,
                        RoleKind::Student => stats.students += 1,
                    }
                    if stored.user.is_suspended {
                        stats.suspended_users += 1;
                    }
                }
                stats
            })
            .await)
    }

    /// Persist everything now
    pub async fn flush(&self) -> Result<()> {
        self.pool.flush().await
    }
}
