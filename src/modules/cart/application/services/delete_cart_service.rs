use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::{Actor, Capability};
use crate::cart::application::ports::{
    incoming::use_cases::{DeleteCartError, DeleteCartUseCase},
    outgoing::{CartQuery, CartRepository, CartRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> DeleteCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> DeleteCartUseCase for DeleteCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, cart_id: Uuid) -> Result<(), DeleteCartError> {
        let cart = self
            .query
            .find_by_id(cart_id)
            .await
            .map_err(|e| DeleteCartError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCartError::CartNotFound)?;

        if !actor.owns_or_can(&cart.user_id, Capability::ManageAnyCart) {
            return Err(DeleteCartError::Forbidden);
        }

        self.repository
            .delete_cart(cart_id)
            .await
            .map_err(|e| match e {
                CartRepositoryError::CartNotFound => DeleteCartError::CartNotFound,
                other => DeleteCartError::RepositoryError(other.to_string()),
            })
    }
}
