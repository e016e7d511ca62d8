use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories::{Column, Entity as CategoryEntity};
use crate::category::application::domain::Category;
use crate::category::application::ports::outgoing::{CategoryQuery, CategoryQueryError};

#[derive(Clone, Debug)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoryQueryError> {
        let rows = CategoryEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CategoryQueryError> {
        let row = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Category::from))
    }
}
