//! Attendance service implementation
//!
//! Teachers take a roll call per course and date; the aggregates behind
//! the attendance sheet and the at-risk list are computed here.

use std::collections::HashSet;
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use crate::aggregation::{group_attendance_by_student, students_below_threshold};
use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::models::{
    AttendanceFilter, AttendanceMark, AttendanceRecord, CreateAttendanceRequest, GroupedAttendance, StudentProfile,
};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging::log_attendance_submission;

#[derive(Clone)]
pub struct AttendanceService {
    database: DatabaseService,
    settings: Settings,
}

impl AttendanceService {
    pub fn new(database: DatabaseService, settings: Settings) -> Self {
        Self { database, settings }
    }

    pub async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>> {
        debug!(filter = ?filter, "Listing attendance");
        self.database.attendance.list(filter).await
    }

    pub async fn list_by_course(&self, course_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list(&AttendanceFilter::course(course_id)).await
    }

    /// Record one mark. A mark for the same student, course and date
    /// replaces the earlier one.
    pub async fn record(&self, mut request: CreateAttendanceRequest) -> Result<AttendanceRecord> {
        request.student_id = request.student_id.trim().to_string();
        if request.student_id.is_empty() {
            return Err(CampusError::InvalidInput("Student ID is required".to_string()));
        }
        self.database.catalog.get_course(request.course_id).await?;

        let record = self.database.attendance.upsert(request).await?;
        debug!(record_id = record.id, student_id = %record.student_id, present = record.is_present, "Attendance recorded");
        Ok(record)
    }

    /// Submit a whole roll call for one course and date.
    /// Each student may appear only once per roll call.
    pub async fn submit_for_course(
        &self,
        course_id: i64,
        date: NaiveDate,
        marks: Vec<AttendanceMark>,
    ) -> Result<Vec<AttendanceRecord>> {
        if marks.is_empty() {
            return Err(CampusError::InvalidInput("No students to mark".to_string()));
        }
        {
            let mut seen = HashSet::new();
            for mark in &marks {
                let student_id = mark.student_id.trim();
                if student_id.is_empty() {
                    return Err(CampusError::InvalidInput("Student ID is required".to_string()));
                }
                if !seen.insert(student_id) {
                    return Err(CampusError::InvalidInput(format!(
                        "Student {} is marked more than once",
                        student_id
                    )));
                }
            }
        }
        self.database.catalog.get_course(course_id).await?;

        let requests = marks
            .into_iter()
            .map(|m| CreateAttendanceRequest {
                student_id: m.student_id.trim().to_string(),
                course_id,
                date,
                is_present: m.is_present,
            })
            .collect();
        let records = self.database.attendance.upsert_many(requests).await?;

        let present = records.iter().filter(|r| r.is_present).count();
        log_attendance_submission(course_id, &date.to_string(), present, records.len());
        Ok(records)
    }

    /// Change the presence flag of an existing record
    pub async fn update(&self, record_id: i64, is_present: bool) -> Result<AttendanceRecord> {
        self.database.attendance.set_presence(record_id, is_present).await
    }

    pub async fn delete(&self, record_id: i64) -> Result<()> {
        self.database.attendance.delete(record_id).await?;
        info!(record_id, "Attendance record deleted");
        Ok(())
    }

    /// Students expected in a course's roll call: the roster of the session
    /// the course is taught to
    pub async fn students_for_course(&self, course_id: i64, session: &str) -> Result<Vec<StudentProfile>> {
        self.database.catalog.get_course(course_id).await?;
        self.database.require_session(session).await?;

        let mut students = self.database.students_in_session(session).await?;
        students.sort_by(|a, b| a.student_id.cmp(&b.student_id));
        Ok(students)
    }

    /// Per-student totals and percentages for a course
    pub async fn grouped_by_course(&self, course_id: i64) -> Result<Vec<GroupedAttendance>> {
        self.database.catalog.get_course(course_id).await?;
        let records = self.list_by_course(course_id).await?;
        let roster = self.database.student_roster().await?;
        Ok(group_attendance_by_student(&records, &roster))
    }

    /// Students under the configured warning threshold for a course
    pub async fn at_risk_students(&self, course_id: i64) -> Result<Vec<GroupedAttendance>> {
        let threshold = self.settings.school.attendance_warning_threshold;
        let grouped = self.grouped_by_course(course_id).await?;
        let at_risk: Vec<GroupedAttendance> = students_below_threshold(&grouped, threshold)
            .into_iter()
            .cloned()
            .collect();

        if !at_risk.is_empty() {
            warn!(course_id, threshold, count = at_risk.len(), "Students below attendance threshold");
        }
        Ok(at_risk)
    }
}
