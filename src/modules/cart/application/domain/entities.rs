use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// A user's staging area for an order. At most one per user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A line as submitted by a client, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CartItemInput {
    pub product_id: Uuid,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartItemError {
    #[error("Quantity must be at least 1")]
    QuantityTooSmall,

    #[error("Quantity is too large")]
    QuantityTooLarge,
}

/// Validates quantities and merges lines for the same product, keeping the
/// position of each product's first occurrence.
pub fn normalize_items(inputs: &[CartItemInput]) -> Result<Vec<CartItem>, CartItemError> {
    let mut items: Vec<CartItem> = Vec::with_capacity(inputs.len());

    for input in inputs {
        if input.quantity < 1 {
            return Err(CartItemError::QuantityTooSmall);
        }
        let quantity =
            u32::try_from(input.quantity).map_err(|_| CartItemError::QuantityTooLarge)?;

        match items.iter_mut().find(|i| i.product_id == input.product_id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartItemError::QuantityTooLarge)?;
            }
            None => items.push(CartItem {
                product_id: input.product_id,
                quantity,
            }),
        }
    }

    Ok(items)
}
