use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;
use crate::cart::application::domain::{
    entities::{normalize_items, CartItemError},
    Cart, CartItem, CartItemInput,
};

#[derive(Debug, Clone)]
pub struct UpdateCartCommand {
    actor: Actor,
    cart_id: Uuid,
    items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateCartCommandError {
    #[error(transparent)]
    InvalidItem(#[from] CartItemError),
}

impl UpdateCartCommand {
    pub fn new(
        actor: Actor,
        cart_id: Uuid,
        items: &[CartItemInput],
    ) -> Result<Self, UpdateCartCommandError> {
        Ok(Self {
            actor,
            cart_id,
            items: normalize_items(items)?,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn cart_id(&self) -> Uuid {
        self.cart_id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCartError {
    #[error("Cart not found")]
    CartNotFound,

    #[error("Only the owner can change this cart")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCartUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCartCommand) -> Result<Cart, UpdateCartError>;
}
