use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCartError {
    #[error("Cart not found")]
    CartNotFound,

    #[error("Not allowed to delete this cart")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCartUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, cart_id: Uuid) -> Result<(), DeleteCartError>;
}
