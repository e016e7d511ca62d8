use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::order::application::domain::{Order, OrderId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOrderError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Not allowed to view this order")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetOrderUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, order_id: OrderId) -> Result<Order, GetOrderError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOrdersError {
    #[error("Not allowed to list orders")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetOrdersUseCase: Send + Sync {
    async fn execute(&self, actor: Actor) -> Result<Vec<Order>, GetOrdersError>;
}
