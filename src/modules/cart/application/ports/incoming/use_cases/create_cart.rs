use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::cart::application::domain::{
    entities::{normalize_items, CartItemError},
    Cart, CartItem, CartItemInput,
};

#[derive(Debug, Clone)]
pub struct CreateCartCommand {
    actor: Actor,
    items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCartCommandError {
    #[error(transparent)]
    InvalidItem(#[from] CartItemError),
}

impl CreateCartCommand {
    pub fn new(actor: Actor, items: &[CartItemInput]) -> Result<Self, CreateCartCommandError> {
        Ok(Self {
            actor,
            items: normalize_items(items)?,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCartError {
    #[error("Cart already exists for this user")]
    CartAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCartUseCase: Send + Sync {
    async fn execute(&self, command: CreateCartCommand) -> Result<Cart, CreateCartError>;
}
