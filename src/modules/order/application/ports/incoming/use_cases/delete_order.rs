use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::order::application::domain::{Order, OrderId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteOrderError {
    #[error("Not allowed to manage orders")]
    Forbidden,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Soft delete: the order is kept and marked cancelled.
#[async_trait]
pub trait DeleteOrderUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, order_id: OrderId) -> Result<Order, DeleteOrderError>;
}
