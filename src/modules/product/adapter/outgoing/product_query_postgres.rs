use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::to_product;
use super::sea_orm_entity::products::{Column, Entity as ProductEntity, Model};
use crate::product::application::domain::Product;
use crate::product::application::ports::outgoing::{ProductQuery, ProductQueryError};

#[derive(Clone, Debug)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProductQueryError {
    ProductQueryError::DatabaseError(e.to_string())
}

fn decode_all(rows: Vec<Model>) -> Result<Vec<Product>, ProductQueryError> {
    rows.into_iter()
        .map(|row| {
            to_product(row).map_err(|e| ProductQueryError::SerializationError(e.to_string()))
        })
        .collect()
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn list_products(&self) -> Result<Vec<Product>, ProductQueryError> {
        let rows = ProductEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_all(rows)
    }

    async fn find_by_id(&self, product_id: Uuid) -> Result<Option<Product>, ProductQueryError> {
        let row = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(|r| to_product(r).map_err(|e| ProductQueryError::SerializationError(e.to_string())))
            .transpose()
    }

    async fn find_by_ids(&self, product_ids: &[Uuid]) -> Result<Vec<Product>, ProductQueryError> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = ProductEntity::find()
            .filter(Column::Id.is_in(product_ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        decode_all(rows)
    }
}
