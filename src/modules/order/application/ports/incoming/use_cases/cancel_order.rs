use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::order::application::domain::{Order, OrderId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CancelOrderError {
    /// Also returned when the order belongs to someone else.
    #[error("Order not found")]
    OrderNotFound,

    #[error("Order cannot be cancelled at this stage")]
    NotCancellable,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CancelOrderUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, order_id: OrderId) -> Result<Order, CancelOrderError>;
}
