//! Schedule service implementation
//!
//! Admins create and edit timetable slots; teachers and students read the
//! slots they own or attend, grouped for display.

use tracing::{debug, info};
use crate::aggregation::{group_schedules_by_day_and_semester, WeeklySchedule};
use crate::database::DatabaseService;
use crate::models::{Course, Schedule, CreateScheduleRequest, UpdateScheduleRequest, ScheduleFilter};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging::log_admin_action;

#[derive(Clone)]
pub struct ScheduleService {
    database: DatabaseService,
}

impl ScheduleService {
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }

    pub async fn list(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>> {
        debug!(filter = ?filter, "Listing schedules");
        self.database.schedules.list(filter).await
    }

    /// Slots taught by a teacher
    pub async fn list_for_teacher(&self, teacher_id: &str) -> Result<Vec<Schedule>> {
        self.list(&ScheduleFilter {
            teacher_id: Some(teacher_id.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Slots attended by a session
    pub async fn list_for_session(&self, session: &str) -> Result<Vec<Schedule>> {
        self.list(&ScheduleFilter {
            session: Some(session.to_string()),
            ..Default::default()
        })
        .await
    }

    /// Filtered slots grouped by weekday and semester
    pub async fn weekly_timetable(&self, filter: &ScheduleFilter) -> Result<WeeklySchedule> {
        let schedules = self.list(filter).await?;
        Ok(group_schedules_by_day_and_semester(&schedules))
    }

    pub async fn get_schedule(&self, schedule_id: &str) -> Result<Schedule> {
        self.database
            .schedules
            .find_by_id(schedule_id)
            .await?
            .ok_or_else(|| CampusError::ScheduleNotFound { schedule_id: schedule_id.to_string() })
    }

    /// Create a slot after checking the course, teacher and session exist
    pub async fn create(&self, mut request: CreateScheduleRequest) -> Result<Schedule> {
        request.venue = request.venue.trim().to_string();
        if request.venue.is_empty() {
            return Err(CampusError::InvalidInput("Venue is required".to_string()));
        }
        if request.start_time >= request.end_time {
            return Err(CampusError::InvalidInput("Start time must be before end time".to_string()));
        }

        let course = self.resolve_references(request.course_id, &request.teacher_id, &request.session).await?;
        let schedule = self.database.schedules.create(request, course).await?;

        log_admin_action("create_schedule", Some(&schedule.id), schedule.course_code());
        info!(schedule_id = %schedule.id, day = %schedule.day_of_week, session = %schedule.session, "Schedule created");
        Ok(schedule)
    }

    /// Partially update a slot, re-checking any reference that changes
    pub async fn update(&self, schedule_id: &str, mut request: UpdateScheduleRequest) -> Result<Schedule> {
        let existing = self.get_schedule(schedule_id).await?;

        let start = request.start_time.unwrap_or(existing.start_time);
        let end = request.end_time.unwrap_or(existing.end_time);
        if start >= end {
            return Err(CampusError::InvalidInput("Start time must be before end time".to_string()));
        }
        if let Some(venue) = request.venue.take() {
            let venue = venue.trim().to_string();
            if venue.is_empty() {
                return Err(CampusError::InvalidInput("Venue is required".to_string()));
            }
            request.venue = Some(venue);
        }

        let course = match request.course_id {
            Some(course_id) if Some(course_id) != existing.course.as_ref().map(|c| c.id) => {
                Some(self.database.catalog.get_course(course_id).await?)
            }
            _ => None,
        };
        if let Some(teacher_id) = &request.teacher_id {
            self.database.require_teacher(teacher_id).await?;
        }
        if let Some(session) = &request.session {
            self.database.require_session(session).await?;
        }

        let schedule = self.database.schedules.update(schedule_id, request, course).await?;
        log_admin_action("update_schedule", Some(schedule_id), None);
        Ok(schedule)
    }

    pub async fn delete(&self, schedule_id: &str) -> Result<()> {
        self.database.schedules.delete(schedule_id).await?;
        log_admin_action("delete_schedule", Some(schedule_id), None);
        Ok(())
    }

    async fn resolve_references(&self, course_id: i64, teacher_id: &str, session: &str) -> Result<Course> {
        let course = self.database.catalog.get_course(course_id).await?;
        self.database.require_teacher(teacher_id).await?;
        self.database.require_session(session).await?;
        Ok(course)
    }
}
