//! User service integration tests

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use CampusHub::models::{Role, RoleKind, UpdateUserRequest, UserFilter, CreateUserRequest};
use CampusHub::CampusError;

#[tokio::test]
async fn test_list_students_and_teachers() {
    let ctx = TestContext::new();
    let users = &ctx.services.user_service;

    let students = users.list_students().await.expect("Failed to list students");
    assert_eq!(students.len(), 3);
    assert!(students.iter().all(|u| u.kind() == RoleKind::Student));

    let teachers = users.list_teachers(true).await.expect("Failed to list teachers");
    assert_eq!(teachers.len(), 2);
}

#[tokio::test]
async fn test_filter_by_session_excludes_suspended() {
    let ctx = TestContext::new();
    let filter = UserFilter {
        role: Some(RoleKind::Student),
        session: Some(OTHER_SESSION.to_string()),
        include_suspended: false,
    };

    let users = ctx.services.user_service.list(&filter).await.unwrap();
    assert!(users.is_empty());

    let filter = UserFilter { include_suspended: true, ..filter };
    let users = ctx.services.user_service.list(&filter).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, SUSPENDED_STUDENT_USER_ID);
}

#[tokio::test]
async fn test_create_student_assigns_next_id() {
    let ctx = TestContext::new();
    let user = ctx
        .services
        .user_service
        .create(new_student_request("2020099", SESSION))
        .await
        .expect("Failed to create student");

    assert_eq!(user.id, "7");
    assert!(!user.is_suspended);
    assert_eq!(user.student_profile().unwrap().session, SESSION);

    let fetched = ctx.services.user_service.get_user("7").await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_create_normalizes_email_and_defaults_password() {
    let ctx = TestContext::new();
    let user = ctx
        .services
        .user_service
        .create(CreateUserRequest {
            email: "  New.Teacher@CampusHub.edu ".to_string(),
            role: Role::Teacher,
            password: None,
        })
        .await
        .unwrap();
    assert_eq!(user.email, "new.teacher@campushub.edu");

    let stored = ctx
        .database
        .users
        .find_credentials("new.teacher@campushub.edu")
        .await
        .unwrap()
        .expect("credentials stored");
    assert_eq!(stored.password, "new.teacher@campushub.edu");
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let ctx = TestContext::new();
    let users = &ctx.services.user_service;

    let mut request = new_student_request("2020100", SESSION);
    request.email = String::new();
    assert_matches!(users.create(request).await, Err(CampusError::InvalidInput(_)));

    let mut request = new_student_request("2020100", SESSION);
    request.email = "not-an-email".to_string();
    assert_matches!(users.create(request).await, Err(CampusError::InvalidInput(_)));

    let mut request = new_student_request("2020100", SESSION);
    request.email = "SADIA@campushub.edu".to_string();
    assert_matches!(users.create(request).await, Err(CampusError::InvalidInput(msg)) if msg.contains("already in use"));

    let request = new_student_request("2020001", SESSION);
    assert_matches!(users.create(request).await, Err(CampusError::InvalidInput(msg)) if msg.contains("Student ID"));

    let request = new_student_request("2020100", "1999-00");
    assert_matches!(users.create(request).await, Err(CampusError::InvalidInput(msg)) if msg.contains("session"));

    let mut request = new_student_request("2020100", SESSION);
    request.password = Some("abc".to_string());
    assert_matches!(users.create(request).await, Err(CampusError::InvalidInput(msg)) if msg.contains("Password"));

    assert_eq!(ctx.database.users.count().await.unwrap(), 6);
}

#[tokio::test]
async fn test_update_user() {
    let ctx = TestContext::new();
    let users = &ctx.services.user_service;

    let updated = users
        .update(
            STUDENT_USER_ID,
            UpdateUserRequest {
                email: Some("sadia.islam@campushub.edu".to_string()),
                student_profile: Some(student_profile("2020001", "Sadia  Islam Khan", SESSION)),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update user");

    assert_eq!(updated.email, "sadia.islam@campushub.edu");
    assert_eq!(updated.student_profile().unwrap().name, "Sadia Islam Khan");

    let result = users
        .update(
            TEACHER_ID,
            UpdateUserRequest {
                student_profile: Some(student_profile("2020500", "Nobody", SESSION)),
                ..Default::default()
            },
        )
        .await;
    assert_matches!(result, Err(CampusError::InvalidInput(_)));

    let result = users.update("404", UpdateUserRequest::default()).await;
    assert_matches!(result, Err(CampusError::UserNotFound { user_id }) if user_id == "404");
}

#[tokio::test]
async fn test_suspend_and_delete() {
    let ctx = TestContext::new();
    let users = &ctx.services.user_service;

    let suspended = users.set_suspended(TEACHER_ID, true).await.unwrap();
    assert!(suspended.is_suspended);
    assert_eq!(users.list_teachers(true).await.unwrap().len(), 1);
    assert_eq!(users.list_teachers(false).await.unwrap().len(), 2);

    users.delete(STUDENT_USER_ID).await.unwrap();
    assert_matches!(users.get_user(STUDENT_USER_ID).await, Err(CampusError::UserNotFound { .. }));
    assert_matches!(users.delete(STUDENT_USER_ID).await, Err(CampusError::UserNotFound { .. }));
    assert_eq!(users.list_students().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_teacher_with_schedules_cannot_be_deleted() {
    let ctx = TestContext::new();
    let users = &ctx.services.user_service;
    let schedules = &ctx.services.schedule_service;

    assert_matches!(
        users.delete(TEACHER_ID).await,
        Err(CampusError::InvalidInput(msg)) if msg.contains("2 scheduled")
    );
    assert!(users.get_user(TEACHER_ID).await.is_ok());
    assert_eq!(schedules.list_for_teacher(TEACHER_ID).await.unwrap().len(), 2);

    for schedule in schedules.list_for_teacher(TEACHER_ID).await.unwrap() {
        schedules.delete(&schedule.id).await.unwrap();
    }
    users.delete(TEACHER_ID).await.expect("Teacher without schedules should be deletable");
    assert_matches!(users.get_user(TEACHER_ID).await, Err(CampusError::UserNotFound { .. }));
}
