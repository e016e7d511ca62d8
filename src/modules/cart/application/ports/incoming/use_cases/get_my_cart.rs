use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::cart::application::domain::Cart;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMyCartError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Returns the caller's cart, creating an empty one on first access.
#[async_trait]
pub trait GetMyCartUseCase: Send + Sync {
    async fn execute(&self, actor: Actor) -> Result<Cart, GetMyCartError>;
}
