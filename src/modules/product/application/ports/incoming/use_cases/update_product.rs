use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;
use crate::product::application::domain::{
    entities::{check_price, check_stock, normalize_images, normalize_product_name, ProductFieldError},
    Product,
};

/// Raw optional fields of a product update request.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i32>,
    pub images: Option<Vec<String>>,
}

impl ProductPatch {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.price_cents.is_none()
            && self.stock.is_none()
            && self.images.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    actor: Actor,
    product_id: Uuid,
    patch: ProductPatch,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProductCommandError {
    #[error("Nothing to update")]
    NothingToUpdate,

    #[error(transparent)]
    InvalidField(#[from] ProductFieldError),
}

impl UpdateProductCommand {
    pub fn new(
        actor: Actor,
        product_id: Uuid,
        patch: ProductPatch,
    ) -> Result<Self, UpdateProductCommandError> {
        if patch.is_empty() {
            return Err(UpdateProductCommandError::NothingToUpdate);
        }

        let patch = ProductPatch {
            name: patch.name.as_deref().map(normalize_product_name).transpose()?,
            category_id: patch.category_id,
            description: patch.description.map(|d| d.trim().to_string()),
            price_cents: patch.price_cents.map(check_price).transpose()?,
            stock: patch.stock.map(check_stock).transpose()?,
            images: patch.images.map(normalize_images).transpose()?,
        };

        Ok(Self {
            actor,
            product_id,
            patch,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn patch(&self) -> &ProductPatch {
        &self.patch
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductError {
    #[error("Not allowed to manage the catalog")]
    Forbidden,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Category does not exist")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, command: UpdateProductCommand) -> Result<Product, UpdateProductError>;
}
