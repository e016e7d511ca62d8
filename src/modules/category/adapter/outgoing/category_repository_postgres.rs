use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::categories::{ActiveModel, Entity as CategoryEntity};
use crate::category::application::domain::Category;
use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CreateCategoryData, UpdateCategoryData,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_write_error(e: sea_orm::DbErr) -> CategoryRepositoryError {
    if is_unique_violation(&e) {
        return CategoryRepositoryError::CategoryAlreadyExists;
    }
    CategoryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        data: CreateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = model.insert(&*self.db).await.map_err(map_write_error)?;
        Ok(inserted.into())
    }

    async fn update_category(
        &self,
        category_id: Uuid,
        data: UpdateCategoryData,
    ) -> Result<Category, CategoryRepositoryError> {
        let existing = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CategoryRepositoryError::CategoryNotFound)?;

        let mut model: ActiveModel = existing.into();
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(description) = data.description {
            model.description = Set(Some(description));
        }

        let updated = model.update(&*self.db).await.map_err(map_write_error)?;
        Ok(updated.into())
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let result = CategoryEntity::delete_by_id(category_id)
            .exec(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CategoryRepositoryError::CategoryNotFound);
        }

        Ok(())
    }
}
