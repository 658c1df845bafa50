//! Event service implementation
//!
//! Teachers post assessments against a course code; students see the
//! events of the courses scheduled for their session.

use tracing::{debug, info};
use crate::aggregation::{course_codes_for_session, filter_events_by_courses, group_events_by_date, sort_events_by_date, EventsByDate};
use crate::database::DatabaseService;
use crate::models::{Event, CreateEventRequest, UpdateEventRequest, EventFilter, ScheduleFilter};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging::log_user_action;

#[derive(Clone)]
pub struct EventService {
    database: DatabaseService,
}

impl EventService {
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }

    pub async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        debug!(filter = ?filter, "Listing events");
        self.database.events.list(filter).await
    }

    /// Events for the courses a session attends, sorted by date
    pub async fn list_for_student_session(&self, session: &str) -> Result<Vec<Event>> {
        let schedules = self
            .database
            .schedules
            .list(&ScheduleFilter {
                session: Some(session.to_string()),
                ..Default::default()
            })
            .await?;
        let codes = course_codes_for_session(&schedules, session);

        let all = self.database.events.list(&EventFilter::default()).await?;
        let mut events = filter_events_by_courses(&all, &codes);
        sort_events_by_date(&mut events);

        debug!(session = %session, courses = codes.len(), events = events.len(), "Resolved session events");
        Ok(events)
    }

    /// A session's events grouped by date
    pub async fn events_by_date(&self, session: &str) -> Result<EventsByDate> {
        let events = self.list_for_student_session(session).await?;
        Ok(group_events_by_date(&events))
    }

    pub async fn get_event(&self, event_id: &str) -> Result<Event> {
        self.database
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| CampusError::EventNotFound { event_id: event_id.to_string() })
    }

    pub async fn create(&self, author_id: &str, mut request: CreateEventRequest) -> Result<Event> {
        request.title = request.title.trim().to_string();
        if request.title.is_empty() {
            return Err(CampusError::InvalidInput("Event title is required".to_string()));
        }
        request.course = self.require_course_code(&request.course).await?;

        let event = self.database.events.create(request).await?;
        log_user_action(author_id, "create_event", Some(&event.id));
        info!(event_id = %event.id, course = %event.course, date = %event.date, "Event created");
        Ok(event)
    }

    pub async fn update(&self, author_id: &str, event_id: &str, mut request: UpdateEventRequest) -> Result<Event> {
        if let Some(title) = request.title.take() {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(CampusError::InvalidInput("Event title is required".to_string()));
            }
            request.title = Some(title);
        }
        if let Some(course) = request.course.take() {
            request.course = Some(self.require_course_code(&course).await?);
        }

        let event = self.database.events.update(event_id, request).await?;
        log_user_action(author_id, "update_event", Some(event_id));
        Ok(event)
    }

    pub async fn delete(&self, author_id: &str, event_id: &str) -> Result<()> {
        self.database.events.delete(event_id).await?;
        log_user_action(author_id, "delete_event", Some(event_id));
        Ok(())
    }

    /// Canonical course code for `code`, which must name a known course
    async fn require_course_code(&self, code: &str) -> Result<String> {
        self.database
            .catalog
            .find_course_by_code(code)
            .await?
            .map(|c| c.course_code)
            .ok_or_else(|| CampusError::InvalidInput(format!("Unknown course code: {}", code.trim())))
    }
}
