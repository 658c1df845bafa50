//! Attendance aggregation

use std::collections::{BTreeMap, HashMap};
use crate::models::{AttendanceRecord, GroupedAttendance, StudentProfile};

/// Presence as a percentage of classes held; `0.0` when no class was held
pub fn compute_attendance_percentage(present: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(present) / f64::from(total) * 100.0
}

/// Group attendance records per student, ordered by student id.
///
/// Names come from `roster`; students missing from it are shown as
/// `Student {id}`.
pub fn group_attendance_by_student(
    records: &[AttendanceRecord],
    roster: &[StudentProfile],
) -> Vec<GroupedAttendance> {
    let names: HashMap<&str, &str> = roster
        .iter()
        .map(|p| (p.student_id.as_str(), p.name.as_str()))
        .collect();

    let mut by_student: BTreeMap<&str, Vec<AttendanceRecord>> = BTreeMap::new();
    for record in records {
        by_student
            .entry(record.student_id.as_str())
            .or_default()
            .push(record.clone());
    }

    by_student
        .into_iter()
        .map(|(student_id, attendance_records)| {
            let total_classes = attendance_records.len() as u32;
            let total_present = attendance_records.iter().filter(|r| r.is_present).count() as u32;
            GroupedAttendance {
                student_id: student_id.to_string(),
                student_name: names
                    .get(student_id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("Student {}", student_id)),
                attendance_records,
                total_present,
                total_classes,
                percentage: compute_attendance_percentage(total_present, total_classes),
            }
        })
        .collect()
}

/// Students strictly below `threshold` percent
pub fn students_below_threshold(grouped: &[GroupedAttendance], threshold: f64) -> Vec<&GroupedAttendance> {
    grouped.iter().filter(|g| g.percentage < threshold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64, student: &str, day: u32, present: bool) -> AttendanceRecord {
        AttendanceRecord {
            id,
            student_id: student.to_string(),
            course_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            is_present: present,
        }
    }

    #[test]
    fn test_percentage() {
        assert_eq!(compute_attendance_percentage(3, 4), 75.0);
        assert_eq!(compute_attendance_percentage(0, 0), 0.0);
        assert_eq!(compute_attendance_percentage(5, 5), 100.0);
    }

    #[test]
    fn test_group_attendance_by_student() {
        let records = vec![
            record(1, "s2", 1, true),
            record(2, "s1", 1, true),
            record(3, "s1", 2, false),
            record(4, "s2", 2, true),
            record(5, "s1", 3, true),
            record(6, "s1", 4, true),
        ];
        let roster = vec![StudentProfile {
            student_id: "s1".to_string(),
            name: "Karim".to_string(),
            session: "2020-21".to_string(),
        }];

        let grouped = group_attendance_by_student(&records, &roster);
        assert_eq!(grouped.len(), 2);

        assert_eq!(grouped[0].student_id, "s1");
        assert_eq!(grouped[0].student_name, "Karim");
        assert_eq!(grouped[0].total_present, 3);
        assert_eq!(grouped[0].total_classes, 4);
        assert_eq!(grouped[0].percentage, 75.0);

        assert_eq!(grouped[1].student_name, "Student s2");
        assert_eq!(grouped[1].percentage, 100.0);

        let below = students_below_threshold(&grouped, 80.0);
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].student_id, "s1");
    }
}
