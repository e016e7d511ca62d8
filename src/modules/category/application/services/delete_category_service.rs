use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::{Actor, Capability};
use crate::category::application::ports::{
    incoming::use_cases::{DeleteCategoryError, DeleteCategoryUseCase},
    outgoing::{CategoryRepository, CategoryRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCategoryUseCase for DeleteCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, category_id: Uuid) -> Result<(), DeleteCategoryError> {
        if !actor.can(Capability::ManageCatalog) {
            return Err(DeleteCategoryError::Forbidden);
        }

        // Products keep their copied category name; no cascade.
        self.repository
            .delete_category(category_id)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => DeleteCategoryError::CategoryNotFound,
                other => DeleteCategoryError::RepositoryError(other.to_string()),
            })
    }
}
