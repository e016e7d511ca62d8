use async_trait::async_trait;

use crate::auth::application::domain::{
    entities::{normalize_email, normalize_name, FieldError},
    UserId, UserProfile,
};

//
// ──────────────────────────────────────────────────────────
// Update Profile Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateProfileCommand {
    user_id: UserId,
    name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileCommandError {
    #[error("Nothing to update")]
    NothingToUpdate,

    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl UpdateProfileCommand {
    pub fn new(
        user_id: UserId,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UpdateProfileCommandError> {
        if name.is_none() && email.is_none() {
            return Err(UpdateProfileCommandError::NothingToUpdate);
        }

        let name = name.as_deref().map(normalize_name).transpose()?;
        let email = email.as_deref().map(normalize_email).transpose()?;

        Ok(Self {
            user_id,
            name,
            email,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError>;
}
