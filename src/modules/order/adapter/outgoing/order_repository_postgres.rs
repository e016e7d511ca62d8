use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use super::mapping::to_order;
use super::sea_orm_entity::orders::{ActiveModel, Entity as OrderEntity, Model};
use crate::order::application::domain::{NewOrder, Order, OrderId, OrderState, OrderStatus};
use crate::order::application::ports::outgoing::{OrderRepository, OrderRepositoryError};

#[derive(Clone, Debug)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> OrderRepositoryError {
    OrderRepositoryError::DatabaseError(e.to_string())
}

fn decode(model: Model) -> Result<Order, OrderRepositoryError> {
    to_order(model).map_err(|e| OrderRepositoryError::SerializationError(e.to_string()))
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrderRepositoryError> {
        let items = serde_json::to_value(&order.items)
            .map_err(|e| OrderRepositoryError::SerializationError(e.to_string()))?;

        let model = ActiveModel {
            id: NotSet,
            user_id: Set(order.user_id.value()),
            items: Set(items),
            total_cents: Set(order.total_cents),
            payment_method: Set(order.payment_method.to_string()),
            status: Set(OrderStatus::Pending.to_string()),
            is_paid: Set(false),
            paid_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        decode(inserted)
    }

    async fn update_state(
        &self,
        order_id: OrderId,
        state: OrderState,
    ) -> Result<Order, OrderRepositoryError> {
        let existing = OrderEntity::find_by_id(order_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(OrderRepositoryError::OrderNotFound)?;

        let mut model: ActiveModel = existing.into();
        model.status = Set(state.status.to_string());
        model.is_paid = Set(state.is_paid);
        model.paid_at = Set(state.paid_at.map(Into::into));

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        decode(updated)
    }
}
