use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::{
    ports::{
        incoming::use_cases::{
            ForgotPasswordCommand, ForgotPasswordError, ForgotPasswordUseCase, IssuedResetToken,
        },
        outgoing::{UserQuery, UserRepository, UserRepositoryError},
    },
    services::reset_token::ResetToken,
};

#[derive(Debug, Clone)]
pub struct ForgotPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    ttl: Duration,
}

impl<Q, R> ForgotPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, ttl: Duration) -> Self {
        Self {
            query,
            repository,
            ttl,
        }
    }
}

#[async_trait]
impl<Q, R> ForgotPasswordUseCase for ForgotPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: ForgotPasswordCommand,
    ) -> Result<IssuedResetToken, ForgotPasswordError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| ForgotPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ForgotPasswordError::UserNotFound)?;

        let token = ResetToken::issue();
        let expires_at = Utc::now() + self.ttl;

        self.repository
            .store_reset_token(user.id, token.hash, expires_at)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ForgotPasswordError::UserNotFound,
                other => ForgotPasswordError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user.id, "Password reset token issued");

        Ok(IssuedResetToken {
            reset_token: token.plain,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::Role;
    use crate::auth::application::services::reset_token::hash_token;
    use crate::tests::support::{fixtures::user_fixture, in_memory::InMemoryStore};

    #[tokio::test]
    async fn forgot_password_stores_hash_and_expiry_together() {
        // Arrange
        let store = InMemoryStore::new();
        let user = user_fixture("ada@example.com", "x", Role::Customer);
        store.insert_user(user.clone());
        let service =
            ForgotPasswordService::new(store.clone(), store.clone(), Duration::minutes(10));

        // Act
        let before = Utc::now();
        let issued = service
            .execute(ForgotPasswordCommand::new("Ada@Example.com").unwrap())
            .await
            .unwrap();

        // Assert
        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.reset_token_hash, Some(hash_token(&issued.reset_token)));
        assert_eq!(stored.reset_token_expires_at, Some(issued.expires_at));
        assert!(issued.expires_at >= before + Duration::minutes(10));
        assert!(issued.expires_at <= Utc::now() + Duration::minutes(10));
    }

    #[tokio::test]
    async fn forgot_password_unknown_email_is_not_found() {
        let store = InMemoryStore::new();
        let service =
            ForgotPasswordService::new(store.clone(), store.clone(), Duration::minutes(10));

        let result = service
            .execute(ForgotPasswordCommand::new("ghost@example.com").unwrap())
            .await;

        assert!(matches!(result, Err(ForgotPasswordError::UserNotFound)));
    }
}
