use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::{AuthSession, Role},
    ports::{
        incoming::use_cases::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase},
        outgoing::{
            CreateUserData, PasswordHasher, TokenProvider, UserQuery, UserRepository,
            UserRepositoryError,
        },
    },
};

#[derive(Clone)]
pub struct RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> RegisterUserUseCase for RegisterUserService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|_| RegisterUserError::HashingFailed)?;

        // Self-registration always yields a customer
        let data = CreateUserData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            role: Role::Customer,
        };

        let user = self.repository.create_user(data).await.map_err(|e| match e {
            UserRepositoryError::UserAlreadyExists => RegisterUserError::EmailAlreadyExists,
            other => RegisterUserError::RepositoryError(other.to_string()),
        })?;

        let token = self
            .tokens
            .generate_access_token(user.id.value(), user.role)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            user: user.profile(),
            token,
        })
    }
}
