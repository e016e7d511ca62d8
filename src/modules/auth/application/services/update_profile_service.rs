use async_trait::async_trait;

use crate::auth::application::{
    domain::UserProfile,
    ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
        outgoing::{UpdateUserData, UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateProfileUseCase for UpdateProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        if let Some(email) = command.email() {
            let holder = self
                .query
                .find_by_email(email)
                .await
                .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?;

            if holder.is_some_and(|u| u.id != command.user_id()) {
                return Err(UpdateProfileError::EmailAlreadyExists);
            }
        }

        let data = UpdateUserData {
            name: command.name().map(str::to_string),
            email: command.email().map(str::to_string),
            ..Default::default()
        };

        self.repository
            .update_user(command.user_id(), data)
            .await
            .map(|user| user.profile())
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                UserRepositoryError::UserAlreadyExists => UpdateProfileError::EmailAlreadyExists,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
