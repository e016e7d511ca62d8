use async_trait::async_trait;

use crate::order::application::domain::{Order, OrderId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrderQueryError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrderQuery: Send + Sync {
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, OrderQueryError>;

    /// Newest first.
    async fn list_orders(&self) -> Result<Vec<Order>, OrderQueryError>;
}
