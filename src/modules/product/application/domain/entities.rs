use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const PRODUCT_NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i32,
    pub in_stock: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Recomputes `in_stock` from `stock`.
    pub fn with_derived_fields(mut self) -> Self {
        self.in_stock = self.stock > 0;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductFieldError {
    #[error("Product name is required")]
    EmptyName,

    #[error("Product name must not exceed 50 characters")]
    NameTooLong,

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Stock cannot be negative")]
    NegativeStock,

    #[error("Image references cannot be empty")]
    EmptyImage,
}

pub fn normalize_product_name(name: &str) -> Result<String, ProductFieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductFieldError::EmptyName);
    }
    if name.chars().count() > PRODUCT_NAME_MAX_LEN {
        return Err(ProductFieldError::NameTooLong);
    }
    Ok(name.to_string())
}

pub fn check_price(price_cents: i64) -> Result<i64, ProductFieldError> {
    if price_cents < 0 {
        return Err(ProductFieldError::NegativePrice);
    }
    Ok(price_cents)
}

pub fn check_stock(stock: i32) -> Result<i32, ProductFieldError> {
    if stock < 0 {
        return Err(ProductFieldError::NegativeStock);
    }
    Ok(stock)
}

pub fn normalize_images(images: Vec<String>) -> Result<Vec<String>, ProductFieldError> {
    images
        .into_iter()
        .map(|image| {
            let image = image.trim().to_string();
            if image.is_empty() {
                Err(ProductFieldError::EmptyImage)
            } else {
                Ok(image)
            }
        })
        .collect()
}
