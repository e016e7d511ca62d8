use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::to_product;
use super::sea_orm_entity::products::{ActiveModel, Entity as ProductEntity};
use crate::product::application::domain::Product;
use crate::product::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError, UpdateProductData,
};

#[derive(Clone, Debug)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProductRepositoryError {
    ProductRepositoryError::DatabaseError(e.to_string())
}

fn to_json(images: &[String]) -> Result<serde_json::Value, ProductRepositoryError> {
    serde_json::to_value(images)
        .map_err(|e| ProductRepositoryError::SerializationError(e.to_string()))
}

fn decode(model: super::sea_orm_entity::products::Model) -> Result<Product, ProductRepositoryError> {
    to_product(model).map_err(|e| ProductRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            category_id: Set(data.category_id),
            category_name: Set(data.category_name),
            description: Set(data.description),
            price_cents: Set(data.price_cents),
            stock: Set(data.stock),
            images: Set(to_json(&data.images)?),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        decode(inserted)
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError> {
        let existing = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        let mut model: ActiveModel = existing.into();
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some((category_id, category_name)) = data.category {
            model.category_id = Set(category_id);
            model.category_name = Set(category_name);
        }
        if let Some(description) = data.description {
            model.description = Set(description);
        }
        if let Some(price_cents) = data.price_cents {
            model.price_cents = Set(price_cents);
        }
        if let Some(stock) = data.stock {
            model.stock = Set(stock);
        }
        if let Some(images) = data.images {
            model.images = Set(to_json(&images)?);
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        decode(updated)
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError> {
        let result = ProductEntity::delete_by_id(product_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProductRepositoryError::ProductNotFound);
        }

        Ok(())
    }
}
