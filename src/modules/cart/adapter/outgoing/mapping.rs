use chrono::Utc;

use super::sea_orm_entity::carts::Model;
use crate::auth::application::domain::UserId;
use crate::cart::application::domain::{Cart, CartItem};

pub(super) fn to_cart(model: Model) -> Result<Cart, serde_json::Error> {
    let items: Vec<CartItem> = serde_json::from_value(model.items)?;

    Ok(Cart {
        id: model.id,
        user_id: UserId::from(model.user_id),
        items,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

pub(super) fn items_to_json(items: &[CartItem]) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(items)
}

#[cfg(test)]
pub(super) fn sample_model(user_id: uuid::Uuid, items: serde_json::Value) -> Model {
    let now = Utc::now();
    Model {
        id: uuid::Uuid::new_v4(),
        user_id,
        items,
        created_at: now.into(),
        updated_at: now.into(),
    }
}
