use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::cart::application::{
    domain::Cart,
    ports::{
        incoming::use_cases::{GetMyCartError, GetMyCartUseCase},
        outgoing::{CartQuery, CartRepository, CartRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct GetMyCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> GetMyCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }

    async fn find_existing(&self, actor: &Actor) -> Result<Option<Cart>, GetMyCartError> {
        self.query
            .find_by_user(actor.user_id)
            .await
            .map_err(|e| GetMyCartError::RepositoryError(e.to_string()))
    }
}

#[async_trait]
impl<R, Q> GetMyCartUseCase for GetMyCartService<R, Q>
where
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor) -> Result<Cart, GetMyCartError> {
        if let Some(cart) = self.find_existing(&actor).await? {
            return Ok(cart);
        }

        match self.repository.create_cart(actor.user_id, Vec::new()).await {
            Ok(cart) => {
                tracing::debug!(user_id = %actor.user_id, cart_id = %cart.id, "Cart created on first access");
                Ok(cart)
            }
            // A concurrent request created it first
            Err(CartRepositoryError::CartAlreadyExists) => self
                .find_existing(&actor)
                .await?
                .ok_or_else(|| GetMyCartError::RepositoryError("cart vanished".to_string())),
            Err(e) => Err(GetMyCartError::RepositoryError(e.to_string())),
        }
    }
}
