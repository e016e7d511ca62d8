use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::AuthSession,
    ports::{
        incoming::use_cases::{LoginUserCommand, LoginUserError, LoginUserUseCase},
        outgoing::{PasswordHasher, TokenProvider, UserQuery},
    },
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginUserCommand) -> Result<AuthSession, LoginUserError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginUserError::QueryError(e.to_string()))?;

        let Some(user) = user else {
            // Unknown emails pay the same hashing cost as a wrong password
            let _ = self.hasher.hash_password(command.password()).await;
            return Err(LoginUserError::InvalidCredentials);
        };

        let valid = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|_| LoginUserError::HashingFailed)?;

        if !valid {
            return Err(LoginUserError::InvalidCredentials);
        }

        // Account state is only checked once the password matched
        if !user.is_active {
            return Err(LoginUserError::AccountDeactivated);
        }

        let token = self
            .tokens
            .generate_access_token(user.id.value(), user.role)
            .map_err(|e| LoginUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            user: user.profile(),
            token,
        })
    }
}
