use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::order::application::{
    domain::{Order, OrderId},
    ports::{
        incoming::use_cases::{CancelOrderError, CancelOrderUseCase},
        outgoing::{OrderQuery, OrderRepository, OrderRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CancelOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> CancelOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CancelOrderUseCase for CancelOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, order_id: OrderId) -> Result<Order, CancelOrderError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await
            .map_err(|e| CancelOrderError::RepositoryError(e.to_string()))?
            .filter(|order| actor.owns(&order.user_id))
            .ok_or(CancelOrderError::OrderNotFound)?;

        let next = order
            .state()
            .cancel_by_owner()
            .map_err(|_| CancelOrderError::NotCancellable)?;

        self.repository
            .update_state(order.id, next)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => CancelOrderError::OrderNotFound,
                other => CancelOrderError::RepositoryError(other.to_string()),
            })
    }
}
