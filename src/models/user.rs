//! User model
//!
//! Role-specific attributes live on the [`Role`] variant, so a teacher can
//! never carry a student id.

use std::fmt;
use serde::{Deserialize, Serialize};

/// Student-only attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub student_id: String,
    pub name: String,
    pub session: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student(StudentProfile),
}

/// Role discriminant without payload, used for filtering and permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::Admin => RoleKind::Admin,
            Role::Teacher => RoleKind::Teacher,
            Role::Student(_) => RoleKind::Student,
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleKind::Admin => write!(f, "admin"),
            RoleKind::Teacher => write!(f, "teacher"),
            RoleKind::Student => write!(f, "student"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(flatten)]
    pub role: Role,
}

impl User {
    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    pub fn student_profile(&self) -> Option<&StudentProfile> {
        match &self.role {
            Role::Student(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.is_suspended
    }
}

/// A user as kept in the data source, including the login password.
///
/// Services never hand this type out; they return [`User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub role: Role,
    /// Defaults to the email address when absent
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub is_suspended: Option<bool>,
    pub password: Option<String>,
    /// Replaces the student profile; only valid for student accounts
    pub student_profile: Option<StudentProfile>,
}

/// Filter for listing users
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub role: Option<RoleKind>,
    pub session: Option<String>,
    pub include_suspended: bool,
}

impl UserFilter {
    pub fn all() -> Self {
        Self {
            include_suspended: true,
            ..Default::default()
        }
    }

    pub fn role(role: RoleKind) -> Self {
        Self {
            role: Some(role),
            include_suspended: true,
            ..Default::default()
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        if !self.include_suspended && user.is_suspended {
            return false;
        }
        if let Some(role) = self.role {
            if user.kind() != role {
                return false;
            }
        }
        if let Some(session) = &self.session {
            match user.student_profile() {
                Some(profile) if &profile.session == session => {}
                _ => return false,
            }
        }
        true
    }
}
