//! Event repository implementation

use crate::database::DatabasePool;
use crate::models::event::{Event, CreateEventRequest, UpdateEventRequest, EventFilter};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::generate_token;

/// Length of the random event identifier
const EVENT_ID_LEN: usize = 9;

#[derive(Clone, Debug)]
pub struct EventRepository {
    pool: DatabasePool,
}

fn not_found(id: &str) -> CampusError {
    CampusError::EventNotFound { event_id: id.to_string() }
}

impl EventRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a new event under a fresh random id
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        self.pool
            .mutate("events.create", |data| {
                let mut id = generate_token(EVENT_ID_LEN);
                while data.events.iter().any(|e| e.id == id) {
                    id = generate_token(EVENT_ID_LEN);
                }
                let event = Event {
                    id,
                    title: request.title,
                    description: request.description,
                    date: request.date,
                    course: request.course,
                    event_type: request.event_type,
                };
                data.events.push(event.clone());
                Ok(event)
            })
            .await
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        Ok(self
            .pool
            .query("events.find_by_id", |data| data.events.iter().find(|e| e.id == id).cloned())
            .await)
    }

    /// Update event
    pub async fn update(&self, id: &str, request: UpdateEventRequest) -> Result<Event> {
        self.pool
            .mutate("events.update", |data| {
                let event = data
                    .events
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| not_found(id))?;

                if let Some(title) = request.title {
                    event.title = title;
                }
                if let Some(description) = request.description {
                    event.description = description;
                }
                if let Some(date) = request.date {
                    event.date = date;
                }
                if let Some(course) = request.course {
                    event.course = course;
                }
                if let Some(event_type) = request.event_type {
                    event.event_type = event_type;
                }

                Ok(event.clone())
            })
            .await
    }

    /// Delete event
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.pool
            .mutate("events.delete", |data| {
                let index = data
                    .events
                    .iter()
                    .position(|e| e.id == id)
                    .ok_or_else(|| not_found(id))?;
                data.events.remove(index);
                Ok(())
            })
            .await
    }

    /// List events matching the filter, in storage order
    pub async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        Ok(self
            .pool
            .query("events.list", |data| {
                data.events.iter().filter(|e| filter.matches(e)).cloned().collect()
            })
            .await)
    }

    /// Count total events
    pub async fn count(&self) -> Result<usize> {
        Ok(self.pool.query("events.count", |data| data.events.len()).await)
    }
}
