use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::{items_to_json, to_cart};
use super::sea_orm_entity::carts::{ActiveModel, Entity as CartEntity, Model};
use crate::auth::application::domain::UserId;
use crate::cart::application::domain::{Cart, CartItem};
use crate::cart::application::ports::outgoing::{CartRepository, CartRepositoryError};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct CartRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CartRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CartRepositoryError {
    CartRepositoryError::DatabaseError(e.to_string())
}

fn encode(items: &[CartItem]) -> Result<serde_json::Value, CartRepositoryError> {
    items_to_json(items).map_err(|e| CartRepositoryError::SerializationError(e.to_string()))
}

fn decode(model: Model) -> Result<Cart, CartRepositoryError> {
    to_cart(model).map_err(|e| CartRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn create_cart(
        &self,
        user_id: UserId,
        items: Vec<CartItem>,
    ) -> Result<Cart, CartRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.value()),
            items: Set(encode(&items)?),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CartRepositoryError::CartAlreadyExists
            } else {
                map_db_err(e)
            }
        })?;

        decode(inserted)
    }

    async fn replace_items(
        &self,
        cart_id: Uuid,
        items: Vec<CartItem>,
    ) -> Result<Cart, CartRepositoryError> {
        let existing = CartEntity::find_by_id(cart_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CartRepositoryError::CartNotFound)?;

        let mut model: ActiveModel = existing.into();
        model.items = Set(encode(&items)?);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        decode(updated)
    }

    async fn delete_cart(&self, cart_id: Uuid) -> Result<(), CartRepositoryError> {
        let result = CartEntity::delete_by_id(cart_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CartRepositoryError::CartNotFound);
        }

        Ok(())
    }
}
