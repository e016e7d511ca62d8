use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::{
    ports::{
        incoming::use_cases::{ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase},
        outgoing::{PasswordHasher, UserQuery, UserRepository},
    },
    services::reset_token::hash_token,
};

#[derive(Clone)]
pub struct ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ResetPasswordUseCase for ResetPasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        let token_hash = hash_token(command.token());

        let user = self
            .query
            .find_by_reset_token_hash(&token_hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidOrExpiredToken)?;

        if user.reset_token_expired(Utc::now()) {
            self.repository
                .clear_reset_token(user.id)
                .await
                .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;
            return Err(ResetPasswordError::InvalidOrExpiredToken);
        }

        let password_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|_| ResetPasswordError::HashingFailed)?;

        self.repository
            .complete_password_reset(user.id, password_hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Password reset completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{Role, User};
    use crate::auth::application::services::reset_token::ResetToken;
    use crate::tests::support::{
        fakes::PlainTextHasher, fixtures::user_fixture, in_memory::InMemoryStore,
    };
    use chrono::Duration;

    fn user_with_token(token: &ResetToken, expires_in: Duration) -> User {
        let mut user = user_fixture("ada@example.com", &PlainTextHasher::hash("old-secret"), Role::Customer);
        user.reset_token_hash = Some(token.hash.clone());
        user.reset_token_expires_at = Some(Utc::now() + expires_in);
        user
    }

    fn service(store: &InMemoryStore) -> ResetPasswordService<InMemoryStore, InMemoryStore> {
        ResetPasswordService::new(store.clone(), store.clone(), Arc::new(PlainTextHasher))
    }

    #[tokio::test]
    async fn reset_sets_password_and_clears_token_fields() {
        let store = InMemoryStore::new();
        let token = ResetToken::issue();
        let user = user_with_token(&token, Duration::minutes(10));
        store.insert_user(user.clone());

        service(&store)
            .execute(ResetPasswordCommand::new(&token.plain, "brand-new").unwrap())
            .await
            .unwrap();

        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.password_hash, PlainTextHasher::hash("brand-new"));
        assert_eq!(stored.reset_token_hash, None);
        assert_eq!(stored.reset_token_expires_at, None);
    }

    #[tokio::test]
    async fn reset_token_is_single_use() {
        let store = InMemoryStore::new();
        let token = ResetToken::issue();
        store.insert_user(user_with_token(&token, Duration::minutes(10)));
        let service = service(&store);

        service
            .execute(ResetPasswordCommand::new(&token.plain, "brand-new").unwrap())
            .await
            .unwrap();

        let second = service
            .execute(ResetPasswordCommand::new(&token.plain, "another-one").unwrap())
            .await;

        assert!(matches!(second, Err(ResetPasswordError::InvalidOrExpiredToken)));
    }

    #[tokio::test]
    async fn expired_token_is_rejected_and_cleared() {
        let store = InMemoryStore::new();
        let token = ResetToken::issue();
        let user = user_with_token(&token, Duration::minutes(-1));
        store.insert_user(user.clone());

        let result = service(&store)
            .execute(ResetPasswordCommand::new(&token.plain, "brand-new").unwrap())
            .await;

        assert!(matches!(result, Err(ResetPasswordError::InvalidOrExpiredToken)));

        let stored = store.user(user.id).unwrap();
        assert_eq!(stored.reset_token_hash, None);
        assert_eq!(stored.reset_token_expires_at, None);
        assert_eq!(stored.password_hash, PlainTextHasher::hash("old-secret"));
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let store = InMemoryStore::new();

        let result = service(&store)
            .execute(ResetPasswordCommand::new("deadbeef", "brand-new").unwrap())
            .await;

        assert!(matches!(result, Err(ResetPasswordError::InvalidOrExpiredToken)));
    }
}
