//! Schedule service integration tests

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use proptest::prelude::*;
use CampusHub::aggregation::{group_schedules_by_day_and_semester, total_scheduled, UNKNOWN_SEMESTER};
use CampusHub::models::{SchoolDay, ScheduleFilter, UpdateScheduleRequest};
use CampusHub::CampusError;

#[tokio::test]
async fn test_list_for_teacher_and_session() {
    let ctx = TestContext::new();
    let schedules = &ctx.services.schedule_service;

    let mine = schedules.list_for_teacher(TEACHER_ID).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|s| s.teacher_id == TEACHER_ID));

    let session = schedules.list_for_session(OTHER_SESSION).await.unwrap();
    let codes: Vec<_> = session.iter().filter_map(|s| s.course_code()).collect();
    assert_eq!(codes, vec!["CSE1101", "CSE1202"]);
}

#[tokio::test]
async fn test_weekly_timetable_groups_by_day_and_semester() {
    let ctx = TestContext::new();
    let timetable = ctx
        .services
        .schedule_service
        .weekly_timetable(&ScheduleFilter::default())
        .await
        .unwrap();

    assert_eq!(timetable.len(), 5);
    assert_eq!(total_scheduled(&timetable), 4);
    assert!(timetable[&SchoolDay::Friday].is_empty());

    let monday = &timetable[&SchoolDay::Monday];
    assert_eq!(monday.keys().collect::<Vec<_>>(), vec!["2nd Year 1st Semester"]);

    let thursday = &timetable[&SchoolDay::Thursday];
    assert_eq!(thursday["1st Year 2nd Semester"][0].id, "s-4");
}

#[tokio::test]
async fn test_create_schedule_embeds_course() {
    let ctx = TestContext::new();
    let created = ctx
        .services
        .schedule_service
        .create(new_schedule_request(2, SchoolDay::Friday))
        .await
        .expect("Failed to create schedule");

    assert_eq!(created.course_code(), Some("CSE1202"));
    assert!(uuid::Uuid::parse_str(&created.id).is_ok());

    let timetable = ctx
        .services
        .schedule_service
        .weekly_timetable(&ScheduleFilter {
            session: Some(SESSION.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(timetable[&SchoolDay::Friday]["1st Year 2nd Semester"].len(), 1);
}

#[tokio::test]
async fn test_create_schedule_validation() {
    let ctx = TestContext::new();
    let schedules = &ctx.services.schedule_service;

    let mut request = new_schedule_request(2, SchoolDay::Friday);
    request.end_time = request.start_time;
    assert_matches!(schedules.create(request).await, Err(CampusError::InvalidInput(_)));

    let mut request = new_schedule_request(2, SchoolDay::Friday);
    request.venue = "  ".to_string();
    assert_matches!(schedules.create(request).await, Err(CampusError::InvalidInput(_)));

    let request = new_schedule_request(99, SchoolDay::Friday);
    assert_matches!(schedules.create(request).await, Err(CampusError::CourseNotFound { course_id: 99 }));

    let mut request = new_schedule_request(2, SchoolDay::Friday);
    request.teacher_id = STUDENT_USER_ID.to_string();
    assert_matches!(schedules.create(request).await, Err(CampusError::InvalidInput(_)));

    assert_eq!(ctx.database.schedules.count().await.unwrap(), 4);
}

#[tokio::test]
async fn test_update_and_delete_schedule() {
    let ctx = TestContext::new();
    let schedules = &ctx.services.schedule_service;

    let updated = schedules
        .update(
            "s-1",
            UpdateScheduleRequest {
                course_id: Some(1),
                day_of_week: Some(SchoolDay::Friday),
                venue: Some("Room 410".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.course_id, 1);
    assert_eq!(updated.course_code(), Some("CSE1101"));
    assert_eq!(updated.day_of_week, SchoolDay::Friday);

    let result = schedules
        .update(
            "s-1",
            UpdateScheduleRequest {
                end_time: Some(time(8, 0)),
                ..Default::default()
            },
        )
        .await;
    assert_matches!(result, Err(CampusError::InvalidInput(_)));

    schedules.delete("s-1").await.unwrap();
    assert_matches!(schedules.get_schedule("s-1").await, Err(CampusError::ScheduleNotFound { .. }));
    assert_matches!(
        schedules.update("s-1", UpdateScheduleRequest::default()).await,
        Err(CampusError::ScheduleNotFound { .. })
    );
}

fn arb_code() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[A-Z]{3}[0-9]{3}".prop_map(Some),
        "[A-Z]{0,4}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn prop_grouping_keeps_every_schedule(entries in prop::collection::vec((0usize..5, arb_code()), 0..40)) {
        let schedules: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, (day, code))| {
                let mut s = schedule(
                    &format!("s-{}", i),
                    course(i as i64, code.as_deref().unwrap_or(""), "Course", 3.0),
                    TEACHER_ID,
                    SchoolDay::ALL[*day],
                    time(9, 0),
                    time(10, 0),
                    SESSION,
                );
                if code.is_none() {
                    s.course = None;
                }
                s
            })
            .collect();

        let grouped = group_schedules_by_day_and_semester(&schedules);
        prop_assert_eq!(grouped.len(), 5);
        prop_assert_eq!(total_scheduled(&grouped), schedules.len());

        for (day, semesters) in &grouped {
            for (label, bucket) in semesters {
                prop_assert!(!label.is_empty());
                for s in bucket {
                    prop_assert_eq!(&s.day_of_week, day);
                    if s.course.is_none() {
                        prop_assert_eq!(label.as_str(), UNKNOWN_SEMESTER);
                    }
                }
            }
        }
    }
}
