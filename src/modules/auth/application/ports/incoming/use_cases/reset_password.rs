use async_trait::async_trait;

use crate::auth::application::domain::entities::{check_password, FieldError};

#[derive(Debug, Clone)]
pub struct ResetPasswordCommand {
    token: String,
    new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetPasswordCommandError {
    #[error("Reset token is required")]
    MissingToken,

    #[error("New password is required")]
    MissingPassword,

    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl ResetPasswordCommand {
    pub fn new(token: &str, new_password: &str) -> Result<Self, ResetPasswordCommandError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ResetPasswordCommandError::MissingToken);
        }
        if new_password.is_empty() {
            return Err(ResetPasswordCommandError::MissingPassword);
        }
        check_password(new_password)?;

        Ok(Self {
            token: token.to_string(),
            new_password: new_password.to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Reset token is invalid or has expired")]
    InvalidOrExpiredToken,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, command: ResetPasswordCommand) -> Result<(), ResetPasswordError>;
}
