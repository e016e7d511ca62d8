use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;
use crate::order::application::domain::{status::InvalidPaymentMethod, Order, PaymentMethod};

#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    actor: Actor,
    payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateOrderCommandError {
    #[error(transparent)]
    InvalidPaymentMethod(#[from] InvalidPaymentMethod),
}

impl CreateOrderCommand {
    /// A missing payment method defaults to cash.
    pub fn new(actor: Actor, payment_method: Option<&str>) -> Result<Self, CreateOrderCommandError> {
        let payment_method = match payment_method {
            Some(raw) => raw.parse()?,
            None => PaymentMethod::default(),
        };

        Ok(Self {
            actor,
            payment_method,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateOrderError {
    #[error("Cart is empty")]
    CartEmpty,

    #[error("Product {0} is no longer available")]
    ProductUnavailable(Uuid),

    #[error("Order total is too large")]
    TotalTooLarge,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, command: CreateOrderCommand) -> Result<Order, CreateOrderError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{Role, UserId};

    fn customer() -> Actor {
        Actor::new(UserId::from(Uuid::new_v4()), Role::Customer)
    }

    #[test]
    fn payment_method_defaults_to_cash() {
        let cmd = CreateOrderCommand::new(customer(), None).unwrap();
        assert_eq!(cmd.payment_method(), PaymentMethod::Cash);

        let cmd = CreateOrderCommand::new(customer(), Some("mobile_money")).unwrap();
        assert_eq!(cmd.payment_method(), PaymentMethod::MobileMoney);
    }

    #[test]
    fn unknown_payment_method_is_rejected() {
        assert!(CreateOrderCommand::new(customer(), Some("cart")).is_err());
    }
}
