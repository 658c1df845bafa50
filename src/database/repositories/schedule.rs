//! Schedule repository implementation

use crate::database::DatabasePool;
use crate::models::{Course, Schedule, CreateScheduleRequest, UpdateScheduleRequest, ScheduleFilter};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::generate_uuid;

#[derive(Clone, Debug)]
pub struct ScheduleRepository {
    pool: DatabasePool,
}

fn not_found(id: &str) -> CampusError {
    CampusError::ScheduleNotFound { schedule_id: id.to_string() }
}

impl ScheduleRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a new schedule, embedding the resolved course
    pub async fn create(&self, request: CreateScheduleRequest, course: Course) -> Result<Schedule> {
        self.pool
            .mutate("schedules.create", |data| {
                let mut id = generate_uuid();
                while data.schedules.iter().any(|s| s.id == id) {
                    id = generate_uuid();
                }
                let schedule = Schedule {
                    id,
                    course_id: request.course_id,
                    teacher_id: request.teacher_id,
                    day_of_week: request.day_of_week,
                    start_time: request.start_time,
                    end_time: request.end_time,
                    venue: request.venue,
                    session: request.session,
                    course: Some(course),
                };
                data.schedules.push(schedule.clone());
                Ok(schedule)
            })
            .await
    }

    /// Find schedule by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>> {
        Ok(self
            .pool
            .query("schedules.find_by_id", |data| {
                data.schedules.iter().find(|s| s.id == id).cloned()
            })
            .await)
    }

    /// Apply a partial update; `course` replaces the snapshot when the course changed
    pub async fn update(&self, id: &str, request: UpdateScheduleRequest, course: Option<Course>) -> Result<Schedule> {
        self.pool
            .mutate("schedules.update", |data| {
                let schedule = data
                    .schedules
                    .iter_mut()
                    .find(|s| s.id == id)
                    .ok_or_else(|| not_found(id))?;

                if let Some(course_id) = request.course_id {
                    schedule.course_id = course_id;
                }
                if let Some(course) = course {
                    schedule.course = Some(course);
                }
                if let Some(teacher_id) = request.teacher_id {
                    schedule.teacher_id = teacher_id;
                }
                if let Some(day) = request.day_of_week {
                    schedule.day_of_week = day;
                }
                if let Some(start) = request.start_time {
                    schedule.start_time = start;
                }
                if let Some(end) = request.end_time {
                    schedule.end_time = end;
                }
                if let Some(venue) = request.venue {
                    schedule.venue = venue;
                }
                if let Some(session) = request.session {
                    schedule.session = session;
                }

                Ok(schedule.clone())
            })
            .await
    }

    /// Delete schedule
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.pool
            .mutate("schedules.delete", |data| {
                let index = data
                    .schedules
                    .iter()
                    .position(|s| s.id == id)
                    .ok_or_else(|| not_found(id))?;
                data.schedules.remove(index);
                Ok(())
            })
            .await
    }

    /// List schedules matching the filter, in storage order
    pub async fn list(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>> {
        Ok(self
            .pool
            .query("schedules.list", |data| {
                data.schedules
                    .iter()
                    .filter(|s| filter.matches(s))
                    .cloned()
                    .collect()
            })
            .await)
    }

    /// Count total schedules
    pub async fn count(&self) -> Result<usize> {
        Ok(self.pool.query("schedules.count", |data| data.schedules.len()).await)
    }
}
