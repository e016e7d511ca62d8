use async_trait::async_trait;
use uuid::Uuid;

use crate::category::application::{
    domain::Category,
    ports::{
        incoming::use_cases::{
            GetCategoriesError, GetCategoriesUseCase, GetCategoryError, GetCategoryUseCase,
        },
        outgoing::CategoryQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoriesUseCase for GetCategoriesService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Category>, GetCategoriesError> {
        self.query
            .list_categories()
            .await
            .map_err(|e| GetCategoriesError::RepositoryError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct GetCategoryService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCategoryService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCategoryUseCase for GetCategoryService<Q>
where
    Q: CategoryQuery + Send + Sync,
{
    async fn execute(&self, category_id: Uuid) -> Result<Category, GetCategoryError> {
        self.query
            .find_by_id(category_id)
            .await
            .map_err(|e| GetCategoryError::RepositoryError(e.to_string()))?
            .ok_or(GetCategoryError::CategoryNotFound)
    }
}
