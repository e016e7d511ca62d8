use async_trait::async_trait;

use crate::order::application::domain::{NewOrder, Order, OrderId, OrderState};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderRepositoryError {
    #[error("Order not found")]
    OrderNotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// The store assigns the id.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderRepositoryError>;

    /// Writes status, paid flag and paid-at together.
    async fn update_state(
        &self,
        order_id: OrderId,
        state: OrderState,
    ) -> Result<Order, OrderRepositoryError>;
}
