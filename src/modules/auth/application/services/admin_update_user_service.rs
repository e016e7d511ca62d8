use async_trait::async_trait;

use crate::auth::application::{
    domain::{Capability, UserProfile},
    ports::{
        incoming::use_cases::{
            AdminUpdateUserCommand, AdminUpdateUserError, AdminUpdateUserUseCase,
        },
        outgoing::{UpdateUserData, UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct AdminUpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> AdminUpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> AdminUpdateUserUseCase for AdminUpdateUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: AdminUpdateUserCommand,
    ) -> Result<UserProfile, AdminUpdateUserError> {
        if !command.actor().can(Capability::ManageUsers) {
            return Err(AdminUpdateUserError::Forbidden);
        }

        if let Some(email) = command.email() {
            let holder = self
                .query
                .find_by_email(email)
                .await
                .map_err(|e| AdminUpdateUserError::RepositoryError(e.to_string()))?;

            if holder.is_some_and(|u| u.id != command.target()) {
                return Err(AdminUpdateUserError::EmailAlreadyExists);
            }
        }

        let data = UpdateUserData {
            name: command.name().map(str::to_string),
            email: command.email().map(str::to_string),
            role: command.role(),
            is_active: command.is_active(),
        };

        let user = self
            .repository
            .update_user(command.target(), data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => AdminUpdateUserError::UserNotFound,
                UserRepositoryError::UserAlreadyExists => AdminUpdateUserError::EmailAlreadyExists,
                other => AdminUpdateUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            admin_id = %command.actor().user_id,
            user_id = %user.id,
            "User updated by admin"
        );

        Ok(user.profile())
    }
}
