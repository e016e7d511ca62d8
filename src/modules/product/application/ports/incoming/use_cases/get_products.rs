use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::domain::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Product>, GetProductsError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProductError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProductUseCase: Send + Sync {
    async fn execute(&self, product_id: Uuid) -> Result<Product, GetProductError>;
}
