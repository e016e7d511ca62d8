use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::UserId;
use crate::cart::application::domain::{Cart, CartItem};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CartRepositoryError {
    #[error("Cart already exists for this user")]
    CartAlreadyExists,

    #[error("Cart not found")]
    CartNotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Fails with `CartAlreadyExists` when the user already owns a cart.
    async fn create_cart(
        &self,
        user_id: UserId,
        items: Vec<CartItem>,
    ) -> Result<Cart, CartRepositoryError>;

    /// Replaces the whole item list.
    async fn replace_items(
        &self,
        cart_id: Uuid,
        items: Vec<CartItem>,
    ) -> Result<Cart, CartRepositoryError>;

    async fn delete_cart(&self, cart_id: Uuid) -> Result<(), CartRepositoryError>;
}
