use async_trait::async_trait;

use crate::auth::application::domain::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    /// `email` must already be normalized.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_reset_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserQueryError>;
}
