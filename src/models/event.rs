//! Event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Assignment,
    #[serde(rename = "Class Test")]
    ClassTest,
    Presentation,
    Quiz,
}

impl ToString for EventType {
    fn to_string(&self) -> String {
        match self {
            EventType::Assignment => "Assignment".to_string(),
            EventType::ClassTest => "Class Test".to_string(),
            EventType::Presentation => "Presentation".to_string(),
            EventType::Quiz => "Quiz".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    /// Course code the event belongs to, e.g. `CSE1101`
    pub course: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub course: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub course: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
}

/// Filter for listing events
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub course_codes: Option<Vec<String>>,
    pub from: Option<NaiveDate>,
    pub event_type: Option<EventType>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.course_codes.as_ref().map_or(true, |codes| codes.iter().any(|c| c == &event.course))
            && self.from.map_or(true, |from| event.date >= from)
            && self.event_type.map_or(true, |t| event.event_type == t)
    }
}
