use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::{Role, User, UserId};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("User still has orders")]
    UserHasOrders,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Stores the reset token hash and its expiry in a single write.
    async fn store_reset_token(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Sets the new password and clears both reset fields in a single write.
    async fn complete_password_reset(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn clear_reset_token(&self, user_id: UserId) -> Result<(), UserRepositoryError>;

    /// Orders are kept as history, so a user who placed any cannot be deleted.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
