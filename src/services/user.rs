//! User service implementation
//!
//! This service handles account creation by admins, profile edits,
//! suspension and removal, with validation in front of every write.

use tracing::{info, warn, debug};
use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::models::user::{Role, RoleKind, StudentProfile, User, CreateUserRequest, UpdateUserRequest, UserFilter};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::{is_valid_email, normalize_email, normalize_whitespace};
use crate::utils::logging::log_admin_action;

/// User service for managing user operations
#[derive(Clone)]
pub struct UserService {
    database: DatabaseService,
    settings: Settings,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(database: DatabaseService, settings: Settings) -> Self {
        Self { database, settings }
    }

    /// List users matching the filter
    pub async fn list(&self, filter: &UserFilter) -> Result<Vec<User>> {
        debug!(role = ?filter.role, session = ?filter.session, "Listing users");
        self.database.users.list(filter).await
    }

    /// All student accounts
    pub async fn list_students(&self) -> Result<Vec<User>> {
        self.list(&UserFilter::role(RoleKind::Student)).await
    }

    /// Teacher accounts; suspended teachers are left out when `active_only`
    pub async fn list_teachers(&self, active_only: bool) -> Result<Vec<User>> {
        let filter = UserFilter {
            role: Some(RoleKind::Teacher),
            include_suspended: !active_only,
            ..Default::default()
        };
        self.list(&filter).await
    }

    /// Get user by ID, or `UserNotFound`
    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        self.database
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| CampusError::UserNotFound { user_id: user_id.to_string() })
    }

    /// Create an account. The password defaults to the email address.
    pub async fn create(&self, mut request: CreateUserRequest) -> Result<User> {
        let email = self.validate_email(&request.email, None).await?;
        request.email = email;
        if let Some(password) = &request.password {
            self.validate_password(password)?;
        }
        if let Role::Student(profile) = &mut request.role {
            *profile = self.validate_student_profile(profile.clone(), None).await?;
        }

        let user = self.database.users.create(request).await?;
        log_admin_action("create_user", Some(&user.id), Some(&user.kind().to_string()));
        info!(user_id = %user.id, role = %user.kind(), "User created");
        Ok(user)
    }

    /// Apply a partial update to an existing account
    pub async fn update(&self, user_id: &str, mut request: UpdateUserRequest) -> Result<User> {
        let existing = self.get_user(user_id).await?;

        if let Some(email) = request.email.take() {
            request.email = Some(self.validate_email(&email, Some(user_id)).await?);
        }
        if let Some(password) = &request.password {
            self.validate_password(password)?;
        }
        if let Some(profile) = request.student_profile.take() {
            if existing.kind() != RoleKind::Student {
                return Err(CampusError::InvalidInput(
                    "Only student accounts carry a student profile".to_string(),
                ));
            }
            request.student_profile = Some(self.validate_student_profile(profile, Some(user_id)).await?);
        }

        let user = self.database.users.update(user_id, request).await?;
        log_admin_action("update_user", Some(user_id), None);
        Ok(user)
    }

    /// Suspend or reinstate an account
    pub async fn set_suspended(&self, user_id: &str, is_suspended: bool) -> Result<User> {
        let user = self.database.users.set_suspended(user_id, is_suspended).await?;

        if is_suspended {
            warn!(user_id = %user_id, "User suspended");
        } else {
            info!(user_id = %user_id, "User reinstated");
        }
        Ok(user)
    }

    /// Remove an account
    pub async fn delete(&self, user_id: &str) -> Result<()> {
        self.database.users.delete(user_id).await?;
        log_admin_action("delete_user", Some(user_id), None);
        Ok(())
    }

    async fn validate_email(&self, email: &str, except_id: Option<&str>) -> Result<String> {
        if email.trim().is_empty() {
            return Err(CampusError::InvalidInput("Email is required".to_string()));
        }
        if !is_valid_email(email) {
            return Err(CampusError::InvalidInput(format!("Invalid email address: {}", email.trim())));
        }

        let email = normalize_email(email);
        if self.database.users.email_taken(&email, except_id).await? {
            return Err(CampusError::InvalidInput(format!("Email already in use: {}", email)));
        }
        Ok(email)
    }

    fn validate_password(&self, password: &str) -> Result<()> {
        let min = self.settings.school.min_password_length;
        if password.chars().count() < min {
            return Err(CampusError::InvalidInput(format!(
                "Password must be at least {} characters",
                min
            )));
        }
        Ok(())
    }

    async fn validate_student_profile(&self, profile: StudentProfile, except_id: Option<&str>) -> Result<StudentProfile> {
        let profile = StudentProfile {
            student_id: profile.student_id.trim().to_string(),
            name: normalize_whitespace(&profile.name),
            session: profile.session.trim().to_string(),
        };

        if profile.student_id.is_empty() {
            return Err(CampusError::InvalidInput("Student ID is required".to_string()));
        }
        if profile.name.is_empty() {
            return Err(CampusError::InvalidInput("Student name is required".to_string()));
        }
        self.database.require_session(&profile.session).await?;

        let duplicate = self
            .database
            .users
            .list(&UserFilter::role(RoleKind::Student))
            .await?
            .into_iter()
            .any(|u| {
                Some(u.id.as_str()) != except_id
                    && u.student_profile().map(|p| p.student_id.as_str()) == Some(profile.student_id.as_str())
            });
        if duplicate {
            return Err(CampusError::InvalidInput(format!(
                "Student ID already registered: {}",
                profile.student_id
            )));
        }

        Ok(profile)
    }
}
