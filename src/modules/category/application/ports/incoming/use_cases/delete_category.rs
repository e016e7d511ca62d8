use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCategoryError {
    #[error("Not allowed to manage the catalog")]
    Forbidden,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, category_id: Uuid) -> Result<(), DeleteCategoryError>;
}
