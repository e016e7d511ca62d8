use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::category::application::domain::{
    entities::{normalize_category_name, normalize_description, CategoryFieldError},
    Category,
};

//
// ──────────────────────────────────────────────────────────
// Create Category Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCategoryCommand {
    actor: Actor,
    name: String,
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCategoryCommandError {
    #[error(transparent)]
    InvalidField(#[from] CategoryFieldError),
}

impl CreateCategoryCommand {
    pub fn new(
        actor: Actor,
        name: &str,
        description: Option<String>,
    ) -> Result<Self, CreateCategoryCommandError> {
        Ok(Self {
            actor,
            name: normalize_category_name(name)?,
            description: normalize_description(description),
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCategoryError {
    #[error("Not allowed to manage the catalog")]
    Forbidden,

    #[error("Category already exists")]
    CategoryAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> Result<Category, CreateCategoryError>;
}
