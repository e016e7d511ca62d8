use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;
use crate::category::application::domain::{
    entities::{normalize_category_name, normalize_description, CategoryFieldError},
    Category,
};

#[derive(Debug, Clone)]
pub struct UpdateCategoryCommand {
    actor: Actor,
    category_id: Uuid,
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCategoryCommandError {
    #[error("Nothing to update")]
    NothingToUpdate,

    #[error(transparent)]
    InvalidField(#[from] CategoryFieldError),
}

impl UpdateCategoryCommand {
    pub fn new(
        actor: Actor,
        category_id: Uuid,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Self, UpdateCategoryCommandError> {
        if name.is_none() && description.is_none() {
            return Err(UpdateCategoryCommandError::NothingToUpdate);
        }

        let name = name.as_deref().map(normalize_category_name).transpose()?;

        Ok(Self {
            actor,
            category_id,
            name,
            description: normalize_description(description),
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCategoryError {
    #[error("Not allowed to manage the catalog")]
    Forbidden,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("Category already exists")]
    CategoryAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> Result<Category, UpdateCategoryError>;
}
