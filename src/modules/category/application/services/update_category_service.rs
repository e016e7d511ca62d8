use async_trait::async_trait;

use crate::auth::application::domain::Capability;
use crate::category::application::{
    domain::Category,
    ports::{
        incoming::use_cases::{UpdateCategoryCommand, UpdateCategoryError, UpdateCategoryUseCase},
        outgoing::{CategoryRepository, CategoryRepositoryError, UpdateCategoryData},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateCategoryUseCase for UpdateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<Category, UpdateCategoryError> {
        if !command.actor().can(Capability::ManageCatalog) {
            return Err(UpdateCategoryError::Forbidden);
        }

        let data = UpdateCategoryData {
            name: command.name().map(str::to_string),
            description: command.description().map(str::to_string),
        };

        self.repository
            .update_category(command.category_id(), data)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => UpdateCategoryError::CategoryNotFound,
                CategoryRepositoryError::CategoryAlreadyExists => {
                    UpdateCategoryError::CategoryAlreadyExists
                }
                other => UpdateCategoryError::RepositoryError(other.to_string()),
            })
    }
}
