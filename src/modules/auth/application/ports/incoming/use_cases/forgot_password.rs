use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ForgotPasswordCommand {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForgotPasswordCommandError {
    #[error("Email is required")]
    MissingEmail,
}

impl ForgotPasswordCommand {
    pub fn new(email: &str) -> Result<Self, ForgotPasswordCommandError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ForgotPasswordCommandError::MissingEmail);
        }

        Ok(Self {
            email: email.to_lowercase(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Plaintext reset token handed back to the caller. Only its hash is stored.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedResetToken {
    pub reset_token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ForgotPasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ForgotPasswordCommand,
    ) -> Result<IssuedResetToken, ForgotPasswordError>;
}
