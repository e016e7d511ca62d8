use async_trait::async_trait;

use crate::auth::application::domain::{Actor, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminDeleteUserError {
    #[error("Not allowed to manage users")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("User has orders and cannot be deleted")]
    UserHasOrders,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AdminDeleteUserUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, target: UserId) -> Result<(), AdminDeleteUserError>;
}
