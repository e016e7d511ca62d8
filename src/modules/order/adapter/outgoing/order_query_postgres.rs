use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::mapping::to_order;
use super::sea_orm_entity::orders::{Column, Entity as OrderEntity, Model};
use crate::order::application::domain::{Order, OrderId};
use crate::order::application::ports::outgoing::{OrderQuery, OrderQueryError};

#[derive(Clone, Debug)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> OrderQueryError {
    OrderQueryError::DatabaseError(e.to_string())
}

fn decode(model: Model) -> Result<Order, OrderQueryError> {
    to_order(model).map_err(|e| OrderQueryError::SerializationError(e.to_string()))
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>, OrderQueryError> {
        OrderEntity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(decode)
            .transpose()
    }

    async fn list_orders(&self) -> Result<Vec<Order>, OrderQueryError> {
        OrderEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(decode)
            .collect()
    }
}
