use async_trait::async_trait;

use crate::auth::application::domain::{
    entities::{check_password, FieldError},
    UserId,
};

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    user_id: UserId,
    current_password: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordCommandError {
    #[error("Current and new password are required")]
    MissingFields,

    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl ChangePasswordCommand {
    pub fn new(
        user_id: UserId,
        current_password: &str,
        new_password: &str,
    ) -> Result<Self, ChangePasswordCommandError> {
        if current_password.is_empty() || new_password.is_empty() {
            return Err(ChangePasswordCommandError::MissingFields);
        }
        check_password(new_password)?;

        Ok(Self {
            user_id,
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(&self, command: ChangePasswordCommand) -> Result<(), ChangePasswordError>;
}
