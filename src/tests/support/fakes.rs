use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

/// Reversible "hash" so tests can seed and inspect stored credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextHasher;

impl PlainTextHasher {
    pub fn hash(password: &str) -> String {
        format!("plain${}", password)
    }
}

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(Self::hash(password) == hash)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FailingHasher;

#[async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}
