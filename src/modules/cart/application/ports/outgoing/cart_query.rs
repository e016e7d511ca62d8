use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::UserId;
use crate::cart::application::domain::Cart;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CartQueryError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CartQuery: Send + Sync {
    async fn find_by_id(&self, cart_id: Uuid) -> Result<Option<Cart>, CartQueryError>;

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Cart>, CartQueryError>;

    /// Most recently updated first.
    async fn list_carts(&self) -> Result<Vec<Cart>, CartQueryError>;
}
