use async_trait::async_trait;

use crate::auth::application::domain::{
    entities::{check_password, normalize_email, normalize_name, FieldError},
    AuthSession,
};

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Name, email and password are required")]
    MissingFields,

    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl RegisterUserCommand {
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, RegisterUserCommandError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(RegisterUserCommandError::MissingFields);
        }

        let name = normalize_name(name)?;
        let email = normalize_email(email)?;
        check_password(password)?;

        Ok(Self {
            name,
            email,
            password: password.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<AuthSession, RegisterUserError>;
}
