use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::domain::Category;

#[derive(Debug, Clone)]
pub struct CreateCategoryData {
    pub name: String,
    pub description: Option<String>,
}

/// `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryData {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CategoryRepositoryError {
    #[error("Category already exists")]
    CategoryAlreadyExists,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError>;

    async fn update_category(
        &self,
        category_id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CategoryRepositoryError>;

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError>;
}
