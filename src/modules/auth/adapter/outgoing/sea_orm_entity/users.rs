use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::{entities::InvalidRole, Role, User, UserId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub reset_token_hash: Option<String>,
    pub reset_token_expires_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            // Only update updated_at on UPDATE, not INSERT
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl TryFrom<Model> for User {
    type Error = InvalidRole;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role: Role = model.role.parse()?;

        Ok(User {
            id: UserId::from(model.id),
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role,
            is_active: model.is_active,
            reset_token_hash: model.reset_token_hash,
            reset_token_expires_at: model
                .reset_token_expires_at
                .map(|at| at.with_timezone(&chrono::Utc)),
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        })
    }
}
