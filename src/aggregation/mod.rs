//! Aggregation engine
//!
//! Pure functions that turn flat entity lists into display-ready groupings.
//! Nothing here touches storage, so the engine is unaffected by the choice
//! of backend.

pub mod schedule;
pub mod event;
pub mod attendance;

pub use schedule::{
    WeeklySchedule, UNKNOWN_SEMESTER, semester_label, schedule_semester,
    group_schedules_by_day_and_semester, total_scheduled, course_codes_for_session,
};
pub use event::{EventsByDate, group_events_by_date, sort_events_by_date, filter_events_by_courses};
pub use attendance::{compute_attendance_percentage, group_attendance_by_student, students_below_threshold};
