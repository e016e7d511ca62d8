use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::{OrderStatus, PaymentMethod};
use crate::auth::application::domain::UserId;
use crate::cart::application::domain::CartItem;
use crate::product::application::domain::Product;

pub type OrderId = i64;

/// Product fields captured when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn state(&self) -> OrderState {
        OrderState {
            status: self.status,
            is_paid: self.is_paid,
            paid_at: self.paid_at,
        }
    }
}

/// An order ready to be stored. New orders are always pending and unpaid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderBuildError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Product {0} is no longer available")]
    ProductUnavailable(Uuid),

    #[error("Order total is too large")]
    TotalOverflow,
}

impl NewOrder {
    /// Snapshots each cart line at the current product price.
    pub fn from_cart(
        user_id: UserId,
        cart_items: &[CartItem],
        products: &[Product],
        payment_method: PaymentMethod,
    ) -> Result<Self, OrderBuildError> {
        if cart_items.is_empty() {
            return Err(OrderBuildError::EmptyCart);
        }

        let mut items = Vec::with_capacity(cart_items.len());
        let mut total_cents: i64 = 0;

        for line in cart_items {
            let product = products
                .iter()
                .find(|p| p.id == line.product_id)
                .ok_or(OrderBuildError::ProductUnavailable(line.product_id))?;

            let line_total = product
                .price_cents
                .checked_mul(i64::from(line.quantity))
                .ok_or(OrderBuildError::TotalOverflow)?;
            total_cents = total_cents
                .checked_add(line_total)
                .ok_or(OrderBuildError::TotalOverflow)?;

            items.push(OrderItem {
                product_id: product.id,
                name: product.name.clone(),
                price_cents: product.price_cents,
                quantity: line.quantity,
            });
        }

        Ok(Self {
            user_id,
            items,
            total_cents,
            payment_method,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Status and payment state machine
// ──────────────────────────────────────────────────────────
//

/// The mutable part of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderState {
    pub status: OrderStatus,
    pub is_paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderTransitionError {
    #[error("Order cannot be cancelled at this stage")]
    NotCancellable,

    #[error("Cancelled orders cannot be updated")]
    OrderCancelled,

    #[error("A paid order cannot be marked unpaid")]
    PaymentCannotBeReverted,

    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Nothing to update")]
    NothingToUpdate,
}

impl OrderState {
    /// Customers may only cancel orders that are still pending and unpaid.
    pub fn cancel_by_owner(self) -> Result<Self, OrderTransitionError> {
        if self.status != OrderStatus::Pending || self.is_paid {
            return Err(OrderTransitionError::NotCancellable);
        }
        Ok(Self {
            status: OrderStatus::Cancelled,
            ..self
        })
    }

    /// Soft delete. Already cancelled orders stay as they are.
    pub fn cancel_by_admin(self) -> Self {
        Self {
            status: OrderStatus::Cancelled,
            ..self
        }
    }

    pub fn apply_admin_update(
        self,
        status: Option<OrderStatus>,
        is_paid: Option<bool>,
        now: DateTime<Utc>,
    ) -> Result<Self, OrderTransitionError> {
        if self.status == OrderStatus::Cancelled {
            return Err(OrderTransitionError::OrderCancelled);
        }
        if status.is_none() && is_paid.is_none() {
            return Err(OrderTransitionError::NothingToUpdate);
        }

        match is_paid {
            // Marking as paid wins over any status in the same request
            Some(true) if !self.is_paid => {
                return Ok(Self {
                    status: OrderStatus::Paid,
                    is_paid: true,
                    paid_at: Some(now),
                });
            }
            Some(false) if self.is_paid => {
                return Err(OrderTransitionError::PaymentCannotBeReverted);
            }
            _ => {}
        }

        let Some(next) = status else {
            return Ok(self);
        };

        if next == self.status {
            return Ok(self);
        }
        if !self.status.can_transition_to(next) {
            return Err(OrderTransitionError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        if next == OrderStatus::Paid {
            return Ok(Self {
                status: next,
                is_paid: true,
                paid_at: Some(now),
            });
        }

        Ok(Self {
            status: next,
            ..self
        })
    }
}
