//! Attendance model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    /// The student's roll number (`StudentProfile::student_id`)
    pub student_id: String,
    pub course_id: i64,
    pub date: NaiveDate,
    pub is_present: bool,
}

impl AttendanceRecord {
    /// Identity of a submission; at most one record exists per key
    pub fn key(&self) -> (&str, i64, NaiveDate) {
        (self.student_id.as_str(), self.course_id, self.date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceRequest {
    pub student_id: String,
    pub course_id: i64,
    pub date: NaiveDate,
    pub is_present: bool,
}

/// One row of a roll call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    pub student_id: String,
    pub is_present: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub course_id: Option<i64>,
    pub student_id: Option<String>,
    pub date: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub fn course(course_id: i64) -> Self {
        Self {
            course_id: Some(course_id),
            ..Default::default()
        }
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.course_id.map_or(true, |c| record.course_id == c)
            && self.student_id.as_ref().map_or(true, |s| &record.student_id == s)
            && self.date.map_or(true, |d| record.date == d)
    }
}

/// Per-student attendance aggregate for one course
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedAttendance {
    pub student_id: String,
    pub student_name: String,
    pub attendance_records: Vec<AttendanceRecord>,
    pub total_present: u32,
    pub total_classes: u32,
    pub percentage: f64,
}
