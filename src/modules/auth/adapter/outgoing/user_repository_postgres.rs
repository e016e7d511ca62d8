use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::{User, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::shared::db::{is_foreign_key_violation, is_unique_violation};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        User::try_from(model).map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))
    }

    async fn find_model(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }

    async fn save(&self, active_user: UserActiveModel) -> Result<UserModel, UserRepositoryError> {
        active_user.update(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            is_active: Set(true),
            reset_token_hash: Set(None),
            reset_token_expires_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Self::to_domain(inserted)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        if let Some(name) = data.name {
            active_user.name = Set(name);
        }
        if let Some(email) = data.email {
            active_user.email = Set(email);
        }
        if let Some(role) = data.role {
            active_user.role = Set(role.as_str().to_string());
        }
        if let Some(is_active) = data.is_active {
            active_user.is_active = Set(is_active);
        }

        let updated = self.save(active_user).await?;
        Self::to_domain(updated)
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(password_hash);

        self.save(active_user).await?;
        Ok(())
    }

    async fn store_reset_token(
        &self,
        user_id: UserId,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.reset_token_hash = Set(Some(token_hash));
        active_user.reset_token_expires_at = Set(Some(expires_at.into()));

        self.save(active_user).await?;
        Ok(())
    }

    async fn complete_password_reset(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password_hash = Set(password_hash);
        active_user.reset_token_hash = Set(None);
        active_user.reset_token_expires_at = Set(None);

        self.save(active_user).await?;
        Ok(())
    }

    async fn clear_reset_token(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let user = self.find_model(user_id).await?;

        let mut active_user: UserActiveModel = user.into();
        active_user.reset_token_hash = Set(None);
        active_user.reset_token_expires_at = Set(None);

        self.save(active_user).await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    return UserRepositoryError::UserHasOrders;
                }
                UserRepositoryError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
