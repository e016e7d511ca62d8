use async_trait::async_trait;

use crate::auth::application::domain::{Actor, Capability};
use crate::order::application::{
    domain::{Order, OrderId},
    ports::{
        incoming::use_cases::{GetOrderError, GetOrderUseCase, GetOrdersError, GetOrdersUseCase},
        outgoing::OrderQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOrderUseCase for GetOrderService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, order_id: OrderId) -> Result<Order, GetOrderError> {
        let order = self
            .query
            .find_by_id(order_id)
            .await
            .map_err(|e| GetOrderError::RepositoryError(e.to_string()))?
            .ok_or(GetOrderError::OrderNotFound)?;

        if !actor.owns_or_can(&order.user_id, Capability::ViewAllOrders) {
            return Err(GetOrderError::Forbidden);
        }

        Ok(order)
    }
}

#[derive(Debug, Clone)]
pub struct GetOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOrdersUseCase for GetOrdersService<Q>
where
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor) -> Result<Vec<Order>, GetOrdersError> {
        if !actor.can(Capability::ViewAllOrders) {
            return Err(GetOrdersError::Forbidden);
        }

        self.query
            .list_orders()
            .await
            .map_err(|e| GetOrdersError::RepositoryError(e.to_string()))
    }
}
