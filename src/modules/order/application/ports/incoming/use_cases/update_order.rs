use async_trait::async_trait;

use crate::auth::application::domain::Actor;
use crate::order::application::domain::{
    status::InvalidOrderStatus, Order, OrderId, OrderStatus, OrderTransitionError,
};

#[derive(Debug, Clone)]
pub struct UpdateOrderCommand {
    actor: Actor,
    order_id: OrderId,
    status: Option<OrderStatus>,
    is_paid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateOrderCommandError {
    #[error(transparent)]
    InvalidStatus(#[from] InvalidOrderStatus),
}

impl UpdateOrderCommand {
    pub fn new(
        actor: Actor,
        order_id: OrderId,
        status: Option<&str>,
        is_paid: Option<bool>,
    ) -> Result<Self, UpdateOrderCommandError> {
        let status = status.map(str::parse::<OrderStatus>).transpose()?;

        Ok(Self {
            actor,
            order_id,
            status,
            is_paid,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn is_paid(&self) -> Option<bool> {
        self.is_paid
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateOrderError {
    #[error("Not allowed to manage orders")]
    Forbidden,

    #[error("Order not found")]
    OrderNotFound,

    #[error(transparent)]
    Transition(#[from] OrderTransitionError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateOrderUseCase: Send + Sync {
    async fn execute(&self, command: UpdateOrderCommand) -> Result<Order, UpdateOrderError>;
}
