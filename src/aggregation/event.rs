//! Event grouping and filtering

use std::collections::{BTreeMap, HashSet};
use chrono::NaiveDate;
use crate::models::Event;

/// Date → events on that date, dates ascending
pub type EventsByDate = BTreeMap<NaiveDate, Vec<Event>>;

/// Group events by their date, keeping input order within a date
pub fn group_events_by_date(events: &[Event]) -> EventsByDate {
    let mut grouped = EventsByDate::new();
    for event in events {
        grouped.entry(event.date).or_default().push(event.clone());
    }
    grouped
}

/// Stable ascending sort by date
pub fn sort_events_by_date(events: &mut [Event]) {
    events.sort_by_key(|e| e.date);
}

/// Keep only events whose course code is in `course_codes`
pub fn filter_events_by_courses<S: AsRef<str>>(events: &[Event], course_codes: &[S]) -> Vec<Event> {
    let wanted: HashSet<&str> = course_codes.iter().map(AsRef::as_ref).collect();
    events
        .iter()
        .filter(|e| wanted.contains(e.course.as_str()))
        .cloned()
        .collect()
}
