use chrono::Utc;

use super::sea_orm_entity::orders::Model;
use crate::auth::application::domain::UserId;
use crate::order::application::domain::{
    status::{InvalidOrderStatus, InvalidPaymentMethod},
    Order, OrderItem,
};

#[derive(Debug, thiserror::Error)]
pub(super) enum DecodeError {
    #[error("items: {0}")]
    Items(#[from] serde_json::Error),

    #[error(transparent)]
    Status(#[from] InvalidOrderStatus),

    #[error(transparent)]
    PaymentMethod(#[from] InvalidPaymentMethod),
}

pub(super) fn to_order(model: Model) -> Result<Order, DecodeError> {
    let items: Vec<OrderItem> = serde_json::from_value(model.items)?;

    Ok(Order {
        id: model.id,
        user_id: UserId::from(model.user_id),
        items,
        total_cents: model.total_cents,
        payment_method: model.payment_method.parse()?,
        status: model.status.parse()?,
        is_paid: model.is_paid,
        paid_at: model.paid_at.map(|t| t.with_timezone(&Utc)),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

#[cfg(test)]
pub(super) fn sample_model(id: i64, status: &str, is_paid: bool) -> Model {
    let now = Utc::now();
    Model {
        id,
        user_id: uuid::Uuid::new_v4(),
        items: serde_json::json!([{
            "product_id": uuid::Uuid::new_v4(),
            "name": "Desk",
            "price_cents": 2500,
            "quantity": 2
        }]),
        total_cents: 5000,
        payment_method: "cash".to_string(),
        status: status.to_string(),
        is_paid,
        paid_at: is_paid.then(|| now.into()),
        created_at: now.into(),
        updated_at: now.into(),
    }
}
