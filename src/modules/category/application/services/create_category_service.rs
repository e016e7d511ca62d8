use async_trait::async_trait;

use crate::auth::application::domain::Capability;
use crate::category::application::{
    domain::Category,
    ports::{
        incoming::use_cases::{CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase},
        outgoing::{CategoryRepository, CategoryRepositoryError, CreateCategoryData},
    },
};

#[derive(Debug, Clone)]
pub struct CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCategoryUseCase for CreateCategoryService<R>
where
    R: CategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError> {
        if !command.actor().can(Capability::ManageCatalog) {
            return Err(CreateCategoryError::Forbidden);
        }

        let data = CreateCategoryData {
            name: command.name().to_string(),
            description: command.description().map(str::to_string),
        };

        self.repository
            .create_category(data)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryAlreadyExists => {
                    CreateCategoryError::CategoryAlreadyExists
                }
                other => CreateCategoryError::RepositoryError(other.to_string()),
            })
    }
}
