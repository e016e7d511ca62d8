use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::domain::Product;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Newest first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductQueryError>;

    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, ProductQueryError>;

    /// Unknown ids are skipped; order is unspecified.
    async fn find_by_ids(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductQueryError>;
}
