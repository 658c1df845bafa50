//! Authentication service implementation
//!
//! This service handles login against the stored credentials and
//! role-based permission checks for every portal operation.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn, debug};
use crate::database::DatabaseService;
use crate::models::user::{RoleKind, User};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::{generate_uuid, normalize_email};

/// Operations gated by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Create, edit, suspend and remove accounts
    ManageUsers,
    /// Edit the timetable
    ManageSchedules,
    /// Post and edit course events
    ManageEvents,
    /// Submit roll calls
    TakeAttendance,
    /// Read attendance sheets
    ViewAttendance,
    ViewSchedule,
    ViewEvents,
    PostForum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login: the account and an opaque session token
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Authentication service for login and access control
#[derive(Clone)]
pub struct AuthService {
    database: DatabaseService,
}

impl AuthService {
    pub fn new(database: DatabaseService) -> Self {
        Self { database }
    }

    /// Check credentials and issue a token
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let email = normalize_email(&credentials.email);
        if email.is_empty() || credentials.password.is_empty() {
            return Err(CampusError::Authentication("Email and password are required".to_string()));
        }

        let stored = match self.database.users.find_credentials(&email).await? {
            Some(stored) if stored.password == credentials.password => stored,
            _ => {
                warn!(email = %email, "Failed login attempt");
                return Err(CampusError::Authentication("Invalid email or password".to_string()));
            }
        };

        if stored.user.is_suspended {
            warn!(user_id = %stored.user.id, "Login refused for suspended account");
            return Err(CampusError::PermissionDenied("Account is suspended".to_string()));
        }

        info!(user_id = %stored.user.id, role = %stored.user.kind(), "User logged in");
        Ok(LoginResponse {
            user: stored.user,
            token: generate_uuid(),
        })
    }

    /// Permissions granted to a role
    pub fn permissions_for(role: RoleKind) -> HashSet<Permission> {
        use Permission::*;
        let granted: &[Permission] = match role {
            RoleKind::Admin => &[ManageUsers, ManageSchedules, ViewAttendance, ViewSchedule, ViewEvents, PostForum],
            RoleKind::Teacher => &[ManageEvents, TakeAttendance, ViewAttendance, ViewSchedule, ViewEvents, PostForum],
            RoleKind::Student => &[ViewSchedule, ViewEvents, PostForum],
        };
        granted.iter().copied().collect()
    }

    pub fn has_permission(user: &User, permission: Permission) -> bool {
        user.is_active() && Self::permissions_for(user.kind()).contains(&permission)
    }

    /// Fails with `PermissionDenied` unless `user` may perform the operation
    pub fn authorize(&self, user: &User, permission: Permission) -> Result<()> {
        if Self::has_permission(user, permission) {
            debug!(user_id = %user.id, permission = ?permission, "Permission granted");
            return Ok(());
        }

        warn!(user_id = %user.id, role = %user.kind(), permission = ?permission, "Permission denied");
        Err(CampusError::PermissionDenied(format!(
            "{} accounts cannot perform {:?}",
            user.kind(),
            permission
        )))
    }
}
