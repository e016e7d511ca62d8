use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::Capability;
use crate::order::application::{
    domain::Order,
    ports::{
        incoming::use_cases::{UpdateOrderCommand, UpdateOrderError, UpdateOrderUseCase},
        outgoing::{OrderQuery, OrderRepository, OrderRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateOrderUseCase for UpdateOrderService<R, Q>
where
    R: OrderRepository + Send + Sync,
    Q: OrderQuery + Send + Sync,
{
    async fn execute(&self, command: UpdateOrderCommand) -> Result<Order, UpdateOrderError> {
        if !command.actor().can(Capability::ManageOrders) {
            return Err(UpdateOrderError::Forbidden);
        }

        let order = self
            .query
            .find_by_id(command.order_id())
            .await
            .map_err(|e| UpdateOrderError::RepositoryError(e.to_string()))?
            .ok_or(UpdateOrderError::OrderNotFound)?;

        let next = order
            .state()
            .apply_admin_update(command.status(), command.is_paid(), Utc::now())?;

        if next == order.state() {
            return Ok(order);
        }

        self.repository
            .update_state(order.id, next)
            .await
            .map_err(|e| match e {
                OrderRepositoryError::OrderNotFound => UpdateOrderError::OrderNotFound,
                other => UpdateOrderError::RepositoryError(other.to_string()),
            })
    }
}
