use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::to_cart;
use super::sea_orm_entity::carts::{Column, Entity as CartEntity, Model};
use crate::auth::application::domain::UserId;
use crate::cart::application::domain::Cart;
use crate::cart::application::ports::outgoing::{CartQuery, CartQueryError};

#[derive(Clone, Debug)]
pub struct CartQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CartQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CartQueryError {
    CartQueryError::DatabaseError(e.to_string())
}

fn decode(model: Model) -> Result<Cart, CartQueryError> {
    to_cart(model).map_err(|e| CartQueryError::SerializationError(e.to_string()))
}

#[async_trait]
impl CartQuery for CartQueryPostgres {
    async fn find_by_id(&self, cart_id: Uuid) -> Result<Option<Cart>, CartQueryError> {
        CartEntity::find_by_id(cart_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(decode)
            .transpose()
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Option<Cart>, CartQueryError> {
        CartEntity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(decode)
            .transpose()
    }

    async fn list_carts(&self) -> Result<Vec<Cart>, CartQueryError> {
        CartEntity::find()
            .order_by_desc(Column::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(decode)
            .collect()
    }
}
