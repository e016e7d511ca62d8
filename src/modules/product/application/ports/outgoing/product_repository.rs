use async_trait::async_trait;
use uuid::Uuid;

use crate::product::application::domain::Product;

#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub name: String,
    pub category_id: Uuid,
    pub category_name: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i32,
    pub images: Vec<String>,
}

/// `None` leaves the column untouched. Category id and name change together.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductData {
    pub name: Option<String>,
    pub category: Option<(Uuid, String)>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(&self, data: CreateProductData)
        -> Result<Product, ProductRepositoryError>;

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError>;

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError>;
}
