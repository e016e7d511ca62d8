use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Newest first.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryQueryError>;

    async fn find_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CategoryQueryError>;
}
