use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

const RESET_TOKEN_BYTES: usize = 32;

/// A freshly generated password-reset token. `plain` goes to the user,
/// `hash` is what gets persisted.
#[derive(Debug, Clone)]
pub struct ResetToken {
    pub plain: String,
    pub hash: String,
}

impl ResetToken {
    pub fn issue() -> Self {
        let mut bytes = [0u8; RESET_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);

        let plain: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        let hash = hash_token(&plain);

        Self { plain, hash }
    }
}

/// SHA-256 hex digest. Raw tokens are never stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_is_64_hex_chars() {
        let token = ResetToken::issue();

        assert_eq!(token.plain.len(), 64);
        assert!(token.plain.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn stored_hash_matches_plain_token() {
        let token = ResetToken::issue();

        assert_eq!(token.hash, hash_token(&token.plain));
        assert_ne!(token.hash, token.plain);
    }

    #[test]
    fn tokens_are_unique() {
        assert_ne!(ResetToken::issue().plain, ResetToken::issue().plain);
    }

    #[test]
    fn hash_token_consistency() {
        assert_eq!(hash_token("token_1"), hash_token("token_1"));
        assert_ne!(hash_token("token_1"), hash_token("token_2"));
        assert_eq!(hash_token("any").len(), 64);
    }
}
