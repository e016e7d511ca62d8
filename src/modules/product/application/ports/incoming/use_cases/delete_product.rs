use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProductError {
    #[error("Not allowed to manage the catalog")]
    Forbidden,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, product_id: Uuid) -> Result<(), DeleteProductError>;
}
