use async_trait::async_trait;

use crate::cart::application::{
    domain::Cart,
    ports::{
        incoming::use_cases::{UpdateCartCommand, UpdateCartError, UpdateCartUseCase},
        outgoing::{CartQuery, CartRepository, CartRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateCartUseCase for UpdateCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    async fn execute(&self, command: UpdateCartCommand) -> Result<Cart, UpdateCartError> {
        let cart = self
            .query
            .find_by_id(command.cart_id())
            .await
            .map_err(|e| UpdateCartError::RepositoryError(e.to_string()))?
            .ok_or(UpdateCartError::CartNotFound)?;

        // Only the owner edits the contents, admins included
        if !command.actor().owns(&cart.user_id) {
            return Err(UpdateCartError::Forbidden);
        }

        self.repository
            .replace_items(cart.id, command.items().to_vec())
            .await
            .map_err(|e| match e {
                CartRepositoryError::CartNotFound => UpdateCartError::CartNotFound,
                other => UpdateCartError::RepositoryError(other.to_string()),
            })
    }
}
