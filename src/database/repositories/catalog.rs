//! Reference data: courses and sessions

use crate::database::DatabasePool;
use crate::models::Course;
use crate::utils::errors::{CampusError, Result};

#[derive(Clone, Debug)]
pub struct CatalogRepository {
    pool: DatabasePool,
}

impl CatalogRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.pool.query("courses.list", |data| data.courses.clone()).await)
    }

    pub async fn find_course(&self, id: i64) -> Result<Option<Course>> {
        Ok(self
            .pool
            .query("courses.find", |data| data.courses.iter().find(|c| c.id == id).cloned())
            .await)
    }

    /// Course by id, or `CourseNotFound`
    pub async fn get_course(&self, id: i64) -> Result<Course> {
        self.find_course(id)
            .await?
            .ok_or(CampusError::CourseNotFound { course_id: id })
    }

    pub async fn find_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        Ok(self
            .pool
            .query("courses.find_by_code", |data| {
                data.courses
                    .iter()
                    .find(|c| c.course_code.eq_ignore_ascii_case(code.trim()))
                    .cloned()
            })
            .await)
    }

    pub async fn list_sessions(&self) -> Result<Vec<String>> {
        Ok(self.pool.query("sessions.list", |data| data.sessions.clone()).await)
    }

    pub async fn session_exists(&self, session: &str) -> Result<bool> {
        Ok(self
            .pool
            .query("sessions.exists", |data| data.sessions.iter().any(|s| s == session))
            .await)
    }
}
