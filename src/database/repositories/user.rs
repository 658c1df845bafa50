//! User repository implementation

use crate::database::DatabasePool;
use crate::models::user::{Role, StoredUser, User, CreateUserRequest, UpdateUserRequest, UserFilter};
use crate::utils::errors::{CampusError, Result};
use crate::utils::helpers::next_id;

#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: DatabasePool,
}

fn not_found(id: &str) -> CampusError {
    CampusError::UserNotFound { user_id: id.to_string() }
}

impl UserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create a new user with the next numeric id
    pub async fn create(&self, request: CreateUserRequest) -> Result<User> {
        self.pool
            .mutate("users.create", |data| {
                let id = next_id(data.users.iter().filter_map(|u| u.user.id.parse::<i64>().ok()));
                let password = request.password.unwrap_or_else(|| request.email.clone());
                let user = User {
                    id: id.to_string(),
                    email: request.email,
                    is_suspended: false,
                    role: request.role,
                };
                data.users.push(StoredUser {
                    user: user.clone(),
                    password,
                });
                Ok(user)
            })
            .await
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .pool
            .query("users.find_by_id", |data| {
                data.users.iter().find(|u| u.user.id == id).map(|u| u.user.clone())
            })
            .await)
    }

    /// Stored record including the password, for login
    pub async fn find_credentials(&self, email: &str) -> Result<Option<StoredUser>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .pool
            .query("users.find_credentials", |data| {
                data.users
                    .iter()
                    .find(|u| u.user.email.to_lowercase() == email)
                    .cloned()
            })
            .await)
    }

    /// Update user
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User> {
        self.pool
            .mutate("users.update", |data| {
                let stored = data
                    .users
                    .iter_mut()
                    .find(|u| u.user.id == id)
                    .ok_or_else(|| not_found(id))?;

                if let Some(profile) = request.student_profile {
                    match &mut stored.user.role {
                        Role::Student(current) => *current = profile,
                        _ => {
                            return Err(CampusError::InvalidInput(
                                "Only student accounts carry a student profile".to_string(),
                            ))
                        }
                    }
                }
                if let Some(email) = request.email {
                    stored.user.email = email;
                }
                if let Some(is_suspended) = request.is_suspended {
                    stored.user.is_suspended = is_suspended;
                }
                if let Some(password) = request.password {
                    stored.password = password;
                }

                Ok(stored.user.clone())
            })
            .await
    }

    /// Suspend or reinstate a user
    pub async fn set_suspended(&self, id: &str, is_suspended: bool) -> Result<User> {
        self.update(
            id,
            UpdateUserRequest {
                is_suspended: Some(is_suspended),
                ..Default::default()
            },
        )
        .await
    }

    /// Delete user. Teachers still assigned to a schedule cannot be removed.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.pool
            .mutate("users.delete", |data| {
                let index = data
                    .users
                    .iter()
                    .position(|u| u.user.id == id)
                    .ok_or_else(|| not_found(id))?;
                let assigned = data.schedules.iter().filter(|s| s.teacher_id == id).count();
                if assigned > 0 {
                    return Err(CampusError::InvalidInput(format!(
                        "User {} still teaches {} scheduled class(es); reassign or delete them first",
                        id, assigned
                    )));
                }
                data.users.remove(index);
                Ok(())
            })
            .await
    }

    /// List users matching the filter, in storage order
    pub async fn list(&self, filter: &UserFilter) -> Result<Vec<User>> {
        Ok(self
            .pool
            .query("users.list", |data| {
                data.users
                    .iter()
                    .map(|u| &u.user)
                    .filter(|u| filter.matches(u))
                    .cloned()
                    .collect()
            })
            .await)
    }

    /// Whether another account already uses `email`
    pub async fn email_taken(&self, email: &str, except_id: Option<&str>) -> Result<bool> {
        let email = email.trim().to_lowercase();
        Ok(self
            .pool
            .query("users.email_taken", |data| {
                data.users.iter().any(|u| {
                    u.user.email.to_lowercase() == email && Some(u.user.id.as_str()) != except_id
                })
            })
            .await)
    }

    /// Count total users
    pub async fn count(&self) -> Result<usize> {
        Ok(self.pool.query("users.count", |data| data.users.len()).await)
    }
}
