use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::Actor;
use crate::product::application::domain::{
    entities::{check_price, check_stock, normalize_images, normalize_product_name, ProductFieldError},
    Product,
};

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    actor: Actor,
    name: String,
    category_id: Uuid,
    description: String,
    price_cents: i64,
    stock: i32,
    images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProductCommandError {
    #[error(transparent)]
    InvalidField(#[from] ProductFieldError),
}

impl CreateProductCommand {
    pub fn new(
        actor: Actor,
        name: &str,
        category_id: Uuid,
        description: Option<String>,
        price_cents: i64,
        stock: i32,
        images: Vec<String>,
    ) -> Result<Self, CreateProductCommandError> {
        Ok(Self {
            actor,
            name: normalize_product_name(name)?,
            category_id,
            description: description.map(|d| d.trim().to_string()).unwrap_or_default(),
            price_cents: check_price(price_cents)?,
            stock: check_stock(stock)?,
            images: normalize_images(images)?,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("Not allowed to manage the catalog")]
    Forbidden,

    #[error("Category does not exist")]
    CategoryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, command: CreateProductCommand) -> Result<Product, CreateProductError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{Role, UserId};

    fn admin() -> Actor {
        Actor::new(UserId::from(Uuid::new_v4()), Role::Admin)
    }

    #[test]
    fn valid_command_normalizes_fields() {
        let cmd = CreateProductCommand::new(
            admin(),
            " Lamp ",
            Uuid::new_v4(),
            None,
            1999,
            4,
            vec!["lamp.png".to_string()],
        )
        .unwrap();

        assert_eq!(cmd.name(), "Lamp");
        assert_eq!(cmd.description(), "");
        assert_eq!(cmd.images(), ["lamp.png".to_string()]);
    }

    #[test]
    fn negative_price_is_rejected() {
        let result =
            CreateProductCommand::new(admin(), "Lamp", Uuid::new_v4(), None, -1, 0, vec![]);

        assert_eq!(
            result.unwrap_err(),
            CreateProductCommandError::InvalidField(ProductFieldError::NegativePrice)
        );
    }
}
