use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;
use crate::cart::application::domain::Cart;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCartError {
    #[error("Cart not found")]
    CartNotFound,

    #[error("Not allowed to view this cart")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, cart_id: Uuid) -> Result<Cart, GetCartError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCartsError {
    #[error("Not allowed to list carts")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCartsUseCase: Send + Sync {
    async fn execute(&self, actor: Actor) -> Result<Vec<Cart>, GetCartsError>;
}
