use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::{Actor, Capability};
use crate::cart::application::{
    domain::Cart,
    ports::{
        incoming::use_cases::{GetCartError, GetCartUseCase, GetCartsError, GetCartsUseCase},
        outgoing::CartQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetCartService<Q>
where
    Q: CartQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCartService<Q>
where
    Q: CartQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCartUseCase for GetCartService<Q>
where
    Q: CartQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, cart_id: Uuid) -> Result<Cart, GetCartError> {
        let cart = self
            .query
            .find_by_id(cart_id)
            .await
            .map_err(|e| GetCartError::RepositoryError(e.to_string()))?
            .ok_or(GetCartError::CartNotFound)?;

        if !actor.owns_or_can(&cart.user_id, Capability::ManageAnyCart) {
            return Err(GetCartError::Forbidden);
        }

        Ok(cart)
    }
}

#[derive(Debug, Clone)]
pub struct GetCartsService<Q>
where
    Q: CartQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetCartsService<Q>
where
    Q: CartQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCartsUseCase for GetCartsService<Q>
where
    Q: CartQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor) -> Result<Vec<Cart>, GetCartsError> {
        if !actor.can(Capability::ViewAllCarts) {
            return Err(GetCartsError::Forbidden);
        }

        self.query
            .list_carts()
            .await
            .map_err(|e| GetCartsError::RepositoryError(e.to_string()))
    }
}
