//! Timetable grouping
//!
//! Schedules are bucketed by teaching day, then by a semester label derived
//! from the course code (`CSE2202` is taught in the 2nd year, 2nd semester).

use std::collections::BTreeMap;
use crate::models::{Schedule, SchoolDay};

/// Label for schedules whose course is missing or whose code cannot be read
pub const UNKNOWN_SEMESTER: &str = "Unknown";

/// Day → semester label → schedules, in display order
pub type WeeklySchedule = BTreeMap<SchoolDay, BTreeMap<String, Vec<Schedule>>>;

fn ordinal(n: u32) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{}th", n),
    }
}

/// Derive "Nth Year Mth Semester" from the 4th and 5th characters of a course code
pub fn semester_label(course_code: &str) -> String {
    let mut digits = course_code.trim().chars().skip(3);
    let year = digits.next().and_then(|c| c.to_digit(10));
    let semester = digits.next().and_then(|c| c.to_digit(10));

    match (year, semester) {
        (Some(year), Some(semester @ 1..=2)) if year >= 1 => {
            format!("{} Year {} Semester", ordinal(year), ordinal(semester))
        }
        _ => UNKNOWN_SEMESTER.to_string(),
    }
}

/// Semester label for a schedule, falling back to [`UNKNOWN_SEMESTER`]
pub fn schedule_semester(schedule: &Schedule) -> String {
    schedule
        .course_code()
        .map(semester_label)
        .unwrap_or_else(|| UNKNOWN_SEMESTER.to_string())
}

/// Group schedules by weekday and semester.
///
/// All five teaching days are present in the result, possibly empty.
/// Labels sort lexically within a day; schedules keep their input order
/// within a label.
pub fn group_schedules_by_day_and_semester(schedules: &[Schedule]) -> WeeklySchedule {
    let mut grouped: WeeklySchedule = SchoolDay::ALL
        .iter()
        .map(|day| (*day, BTreeMap::new()))
        .collect();

    for schedule in schedules {
        grouped
            .entry(schedule.day_of_week)
            .or_default()
            .entry(schedule_semester(schedule))
            .or_insert_with(Vec::new)
            .push(schedule.clone());
    }

    grouped
}

/// Number of schedules across every bucket
pub fn total_scheduled(grouped: &WeeklySchedule) -> usize {
    grouped
        .values()
        .flat_map(|semesters| semesters.values())
        .map(Vec::len)
        .sum()
}

/// Distinct course codes taught to a session, in first-seen order
pub fn course_codes_for_session(schedules: &[Schedule], session: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for code in schedules
        .iter()
        .filter(|s| s.session == session)
        .filter_map(Schedule::course_code)
    {
        if !codes.iter().any(|c| c == code) {
            codes.push(code.to_string());
        }
    }
    codes
}
