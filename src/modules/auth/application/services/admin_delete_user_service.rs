use async_trait::async_trait;

use crate::auth::application::{
    domain::{Actor, Capability, UserId},
    ports::{
        incoming::use_cases::{AdminDeleteUserError, AdminDeleteUserUseCase},
        outgoing::{UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct AdminDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> AdminDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AdminDeleteUserUseCase for AdminDeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, actor: Actor, target: UserId) -> Result<(), AdminDeleteUserError> {
        if !actor.can(Capability::ManageUsers) {
            return Err(AdminDeleteUserError::Forbidden);
        }

        self.repository
            .delete_user(target)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => AdminDeleteUserError::UserNotFound,
                UserRepositoryError::UserHasOrders => AdminDeleteUserError::UserHasOrders,
                other => AdminDeleteUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(admin_id = %actor.user_id, user_id = %target, "User deleted by admin");
        Ok(())
    }
}
