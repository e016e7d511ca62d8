use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::{
    incoming::use_cases::{ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase},
    outgoing::{PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
};

#[derive(Clone)]
pub struct ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ChangePasswordService<Q, R>
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
impl<Q, R> ChangePasswordUseCase for ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: ChangePasswordCommand) -> Result<(), ChangePasswordError> {
        let user = self
            .query
            .find_by_id(command.user_id())
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .hasher
            .verify_password(command.current_password(), &user.password_hash)
            .await
            .map_err(|_| ChangePasswordError::HashingFailed)?;

        if !matches {
            return Err(ChangePasswordError::IncorrectPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|_| ChangePasswordError::HashingFailed)?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::{Role, UserId};
    use crate::tests::support::{
        fakes::PlainTextHasher, fixtures::user_fixture, in_memory::InMemoryStore,
    };
    use uuid::Uuid;

    fn setup() -> (InMemoryStore, UserId, ChangePasswordService<InMemoryStore, InMemoryStore>) {
        let store = InMemoryStore::new();
        let user = user_fixture(
            "ada@example.com",
            &PlainTextHasher::hash("old-secret"),
            Role::Customer,
        );
        store.insert_user(user.clone());
        let service =
            ChangePasswordService::new(store.clone(), store.clone(), Arc::new(PlainTextHasher));
        (store, user.id, service)
    }

    #[tokio::test]
    async fn change_password_replaces_hash() {
        let (store, id, service) = setup();

        let command = ChangePasswordCommand::new(id, "old-secret", "new-secret").unwrap();
        service.execute(command).await.unwrap();

        assert_eq!(
            store.user(id).unwrap().password_hash,
            PlainTextHasher::hash("new-secret")
        );
    }

    #[tokio::test]
    async fn change_password_wrong_current_is_rejected() {
        let (store, id, service) = setup();

        let command = ChangePasswordCommand::new(id, "guess", "new-secret").unwrap();
        let result = service.execute(command).await;

        assert!(matches!(result, Err(ChangePasswordError::IncorrectPassword)));
        assert_eq!(
            store.user(id).unwrap().password_hash,
            PlainTextHasher::hash("old-secret")
        );
    }

    #[tokio::test]
    async fn change_password_missing_user_is_not_found() {
        let (_store, _id, service) = setup();

        let command =
            ChangePasswordCommand::new(UserId::from(Uuid::new_v4()), "old-secret", "new-secret")
                .unwrap();
        let result = service.execute(command).await;

        assert!(matches!(result, Err(ChangePasswordError::UserNotFound)));
    }
}
