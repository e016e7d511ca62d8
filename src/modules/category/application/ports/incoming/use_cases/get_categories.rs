use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::Category;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoriesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCategoryError {
    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCategoryUseCase: Send + Sync {
    async fn execute(&self, category_id: Uuid) -> Result<Category, GetCategoryError>;
}
