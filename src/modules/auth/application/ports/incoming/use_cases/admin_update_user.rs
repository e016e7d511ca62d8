use async_trait::async_trait;

use crate::auth::application::domain::{
    entities::{normalize_email, normalize_name, FieldError, InvalidRole},
    Actor, Role, UserId, UserProfile,
};

//
// ──────────────────────────────────────────────────────────
// Admin Update User Command
// ──────────────────────────────────────────────────────────
//

/// Only name, email, role and the active flag can be changed by an admin.
#[derive(Debug, Clone)]
pub struct AdminUpdateUserCommand {
    actor: Actor,
    target: UserId,
    name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminUpdateUserCommandError {
    #[error("Nothing to update")]
    NothingToUpdate,

    #[error(transparent)]
    InvalidRole(#[from] InvalidRole),

    #[error(transparent)]
    InvalidField(#[from] FieldError),
}

impl AdminUpdateUserCommand {
    pub fn new(
        actor: Actor,
        target: UserId,
        name: Option<String>,
        email: Option<String>,
        role: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Self, AdminUpdateUserCommandError> {
        if name.is_none() && email.is_none() && role.is_none() && is_active.is_none() {
            return Err(AdminUpdateUserCommandError::NothingToUpdate);
        }

        let name = name.as_deref().map(normalize_name).transpose()?;
        let email = email.as_deref().map(normalize_email).transpose()?;
        let role = role.as_deref().map(str::parse::<Role>).transpose()?;

        Ok(Self {
            actor,
            target,
            name,
            email,
            role,
            is_active,
        })
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn target(&self) -> UserId {
        self.target
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_active(&self) -> Option<bool> {
        self.is_active
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminUpdateUserError {
    #[error("Not allowed to manage users")]
    Forbidden,

    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AdminUpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        command: AdminUpdateUserCommand,
    ) -> Result<UserProfile, AdminUpdateUserError>;
}
