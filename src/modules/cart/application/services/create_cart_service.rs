use async_trait::async_trait;

use crate::cart::application::{
    domain::Cart,
    ports::{
        incoming::use_cases::{CreateCartCommand, CreateCartError, CreateCartUseCase},
        outgoing::{CartRepository, CartRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateCartService<R>
where
    R: CartRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCartService<R>
where
    R: CartRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCartUseCase for CreateCartService<R>
where
    R: CartRepository + Send + Sync,
{
    async fn execute(&self, command: CreateCartCommand) -> Result<Cart, CreateCartError> {
        self.repository
            .create_cart(command.actor().user_id, command.items().to_vec())
            .await
            .map_err(|e| match e {
                CartRepositoryError::CartAlreadyExists => CreateCartError::CartAlreadyExists,
                other => CreateCartError::RepositoryError(other.to_string()),
            })
    }
}
