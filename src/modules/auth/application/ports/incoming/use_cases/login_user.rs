use async_trait::async_trait;

use crate::auth::application::domain::AuthSession;

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginUserCommandError {
    #[error("Email and password are required")]
    MissingCredentials,
}

impl LoginUserCommand {
    pub fn new(email: &str, password: &str) -> Result<Self, LoginUserCommandError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(LoginUserCommandError::MissingCredentials);
        }

        Ok(Self {
            email: email.to_lowercase(),
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is deactivated")]
    AccountDeactivated,

    #[error("Password verification failed")]
    HashingFailed,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginUserCommand) -> Result<AuthSession, LoginUserError>;
}
