//! Attendance repository implementation
//!
//! A record is keyed by (student, course, date). Saving an existing key
//! overwrites its presence flag and keeps its id.

use crate::database::{DatabasePool, Dataset};
use crate::models::attendance::{AttendanceRecord, CreateAttendanceRequest, AttendanceFilter};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::next_id;

#[derive(Clone, Debug)]
pub struct AttendanceRepository {
    pool: DatabasePool,
}

fn upsert_in(data: &mut Dataset, request: CreateAttendanceRequest) -> AttendanceRecord {
    if let Some(existing) = data.attendance.iter_mut().find(|r| {
        r.student_id == request.student_id && r.course_id == request.course_id && r.date == request.date
    }) {
        existing.is_present = request.is_present;
        return existing.clone();
    }

    let record = AttendanceRecord {
        id: next_id(data.attendance.iter().map(|r| r.id)),
        student_id: request.student_id,
        course_id: request.course_id,
        date: request.date,
        is_present: request.is_present,
    };
    data.attendance.push(record.clone());
    record
}

impl AttendanceRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Insert a record, or overwrite the one with the same key
    pub async fn upsert(&self, request: CreateAttendanceRequest) -> Result<AttendanceRecord> {
        self.pool
            .mutate("attendance.upsert", |data| Ok(upsert_in(data, request)))
            .await
    }

    /// Upsert a batch under a single write
    pub async fn upsert_many(&self, requests: Vec<CreateAttendanceRequest>) -> Result<Vec<AttendanceRecord>> {
        self.pool
            .mutate("attendance.upsert_many", |data| {
                Ok(requests.into_iter().map(|r| upsert_in(data, r)).collect())
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>> {
        Ok(self
            .pool
            .query("attendance.find_by_id", |data| {
                data.attendance.iter().find(|r| r.id == id).cloned()
            })
            .await)
    }

    /// Change the presence flag of an existing record
    pub async fn set_presence(&self, id: i64, is_present: bool) -> Result<AttendanceRecord> {
        self.pool
            .mutate("attendance.set_presence", |data| {
                let record = data
                    .attendance
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(CampusError::AttendanceNotFound { record_id: id })?;
                record.is_present = is_present;
                Ok(record.clone())
            })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.pool
            .mutate("attendance.delete", |data| {
                let index = data
                    .attendance
                    .iter()
                    .position(|r| r.id == id)
                    .ok_or(CampusError::AttendanceNotFound { record_id: id })?;
                data.attendance.remove(index);
                Ok(())
            })
            .await
    }

    pub async fn list(&self, filter: &AttendanceFilter) -> Result<Vec<AttendanceRecord>> {
        Ok(self
            .pool
            .query("attendance.list", |data| {
                data.attendance.iter().filter(|r| filter.matches(r)).cloned().collect()
            })
            .await)
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.pool.query("attendance.count", |data| data.attendance.len()).await)
    }
}
