use chrono::Utc;

use super::sea_orm_entity::products::Model;
use crate::product::application::domain::Product;

/// Converts a stored row, decoding the JSONB image list.
pub(super) fn to_product(model: Model) -> Result<Product, serde_json::Error> {
    let images: Vec<String> = serde_json::from_value(model.images)?;

    Ok(Product {
        id: model.id,
        name: model.name,
        category_id: model.category_id,
        category_name: model.category_name,
        description: model.description,
        price_cents: model.price_cents,
        stock: model.stock,
        in_stock: model.stock > 0,
        images,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

#[cfg(test)]
pub(super) fn sample_model(name: &str, price_cents: i64, stock: i32) -> Model {
    let now = Utc::now();
    Model {
        id: uuid::Uuid::new_v4(),
        name: name.to_string(),
        category_id: uuid::Uuid::new_v4(),
        category_name: "Lighting".to_string(),
        description: String::new(),
        price_cents,
        stock,
        images: serde_json::json!(["a.png"]),
        created_at: now.into(),
        updated_at: now.into(),
    }
}
