//! Test data helpers for creating test objects
//!
//! The fixture dataset is a small school: one admin, two teachers, three
//! students across two sessions, four courses and a handful of schedules,
//! events, attendance records and forum posts.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use CampusHub::database::Dataset;
use CampusHub::models::*;

pub const ADMIN_ID: &str = "1";
pub const TEACHER_ID: &str = "2";
pub const OTHER_TEACHER_ID: &str = "3";
pub const STUDENT_USER_ID: &str = "4";
pub const SUSPENDED_STUDENT_USER_ID: &str = "6";

pub const SESSION: &str = "2020-21";
pub const OTHER_SESSION: &str = "2021-22";

/// Course taught to `SESSION` with attendance on record
pub const DS_COURSE_ID: i64 = 3;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

pub fn course(id: i64, code: &str, title: &str, credit_hours: f32) -> Course {
    Course {
        id,
        course_code: code.to_string(),
        course_title: title.to_string(),
        credit_hours,
    }
}

pub fn test_courses() -> Vec<Course> {
    vec![
        course(1, "CSE1101", "Structured Programming", 3.0),
        course(2, "CSE1202", "Discrete Mathematics", 3.0),
        course(3, "CSE2101", "Data Structures", 3.0),
        course(4, "CSE2102", "Data Structures Lab", 1.5),
    ]
}

pub fn student_profile(student_id: &str, name: &str, session: &str) -> StudentProfile {
    StudentProfile {
        student_id: student_id.to_string(),
        name: name.to_string(),
        session: session.to_string(),
    }
}

fn stored(id: &str, email: &str, password: &str, role: Role, is_suspended: bool) -> StoredUser {
    StoredUser {
        user: User {
            id: id.to_string(),
            email: email.to_string(),
            is_suspended,
            role,
        },
        password: password.to_string(),
    }
}

pub fn test_users() -> Vec<StoredUser> {
    vec![
        stored(ADMIN_ID, "admin@campushub.edu", "admin123", Role::Admin, false),
        stored(TEACHER_ID, "rahman@campushub.edu", "teacher123", Role::Teacher, false),
        stored(OTHER_TEACHER_ID, "nahar@campushub.edu", "teacher123", Role::Teacher, false),
        stored(
            STUDENT_USER_ID,
            "sadia@campushub.edu",
            "student123",
            Role::Student(student_profile("2020001", "Sadia Islam", SESSION)),
            false,
        ),
        stored(
            "5",
            "rafi@campushub.edu",
            "student123",
            Role::Student(student_profile("2020002", "Rafi Ahmed", SESSION)),
            false,
        ),
        stored(
            SUSPENDED_STUDENT_USER_ID,
            "tanvir@campushub.edu",
            "student123",
            Role::Student(student_profile("2021001", "Tanvir Hasan", OTHER_SESSION)),
            true,
        ),
    ]
}

pub fn schedule(id: &str, course: Course, teacher_id: &str, day: SchoolDay, start: NaiveTime, end: NaiveTime, session: &str) -> Schedule {
    Schedule {
        id: id.to_string(),
        course_id: course.id,
        teacher_id: teacher_id.to_string(),
        day_of_week: day,
        start_time: start,
        end_time: end,
        venue: "Room 301".to_string(),
        session: session.to_string(),
        course: Some(course),
    }
}

pub fn test_schedules() -> Vec<Schedule> {
    let courses = test_courses();
    vec![
        schedule("s-1", courses[2].clone(), TEACHER_ID, SchoolDay::Monday, time(9, 0), time(10, 30), SESSION),
        schedule("s-2", courses[3].clone(), TEACHER_ID, SchoolDay::Wednesday, time(11, 0), time(13, 0), SESSION),
        schedule("s-3", courses[0].clone(), OTHER_TEACHER_ID, SchoolDay::Tuesday, time(10, 0), time(11, 30), OTHER_SESSION),
        schedule("s-4", courses[1].clone(), OTHER_TEACHER_ID, SchoolDay::Thursday, time(14, 0), time(15, 30), OTHER_SESSION),
    ]
}

pub fn event(id: &str, title: &str, day: NaiveDate, course: &str, event_type: EventType) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        date: day,
        course: course.to_string(),
        event_type,
    }
}

pub fn test_events() -> Vec<Event> {
    vec![
        event("k3f9x2m1q", "Linked List Assignment", date(2024, 3, 12), "CSE2101", EventType::Assignment),
        event("p8d2w7v4a", "Class Test 1", date(2024, 3, 5), "CSE2101", EventType::ClassTest),
        event("z1r6t9b3c", "Lab Quiz", date(2024, 3, 5), "CSE2102", EventType::Quiz),
        event("m4n7s0e5u", "Pointers Presentation", date(2024, 3, 20), "CSE1101", EventType::Presentation),
    ]
}

pub fn attendance(id: i64, student_id: &str, course_id: i64, day: NaiveDate, is_present: bool) -> AttendanceRecord {
    AttendanceRecord {
        id,
        student_id: student_id.to_string(),
        course_id,
        date: day,
        is_present,
    }
}

/// Sadia attends 3/3, Rafi 1/3 of the Data Structures classes
pub fn test_attendance() -> Vec<AttendanceRecord> {
    vec![
        attendance(1, "2020001", DS_COURSE_ID, date(2024, 3, 4), true),
        attendance(2, "2020002", DS_COURSE_ID, date(2024, 3, 4), false),
        attendance(3, "2020001", DS_COURSE_ID, date(2024, 3, 11), true),
        attendance(4, "2020002", DS_COURSE_ID, date(2024, 3, 11), true),
        attendance(5, "2020001", DS_COURSE_ID, date(2024, 3, 18), true),
        attendance(6, "2020002", DS_COURSE_ID, date(2024, 3, 18), false),
    ]
}

pub fn test_forum() -> Vec<ForumPost> {
    vec![ForumPost {
        id: 1,
        title: "Resources for Data Structures?".to_string(),
        content: "Which book do you recommend?".to_string(),
        author: "Sadia Islam".to_string(),
        date: Utc.with_ymd_and_hms(2024, 3, 2, 10, 15, 0).unwrap(),
        votes: Votes { up_votes: 4, down_votes: 0 },
        comments: vec![Comment {
            id: 1,
            content: "CLRS chapter 10.".to_string(),
            author: "rahman@campushub.edu".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
            votes: Votes { up_votes: 2, down_votes: 0 },
            user_id: TEACHER_ID.to_string(),
        }],
        user_id: STUDENT_USER_ID.to_string(),
    }]
}

/// The full fixture dataset
pub fn test_dataset() -> Dataset {
    Dataset {
        users: test_users(),
        courses: test_courses(),
        sessions: vec![SESSION.to_string(), OTHER_SESSION.to_string(), "2022-23".to_string()],
        schedules: test_schedules(),
        events: test_events(),
        attendance: test_attendance(),
        forum: test_forum(),
    }
}

/// A fresh random address
pub fn fake_email() -> String {
    SafeEmail().fake()
}

pub fn fake_name() -> String {
    Name().fake()
}

pub fn new_student_request(student_id: &str, session: &str) -> CreateUserRequest {
    CreateUserRequest {
        email: fake_email(),
        role: Role::Student(student_profile(student_id, &fake_name(), session)),
        password: None,
    }
}

pub fn new_schedule_request(course_id: i64, day: SchoolDay) -> CreateScheduleRequest {
    CreateScheduleRequest {
        course_id,
        teacher_id: TEACHER_ID.to_string(),
        day_of_week: day,
        start_time: time(13, 0),
        end_time: time(14, 30),
        venue: "Room 204".to_string(),
        session: SESSION.to_string(),
    }
}
