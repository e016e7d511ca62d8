use crate::config::{parse_or, required, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;
const MAX_ACCESS_EXPIRY_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }

        let access_token_expiry =
            parse_or(lookup, "JWT_ACCESS_EXPIRY", DEFAULT_ACCESS_EXPIRY_SECS)?;
        if !(1..=MAX_ACCESS_EXPIRY_SECS).contains(&access_token_expiry) {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: format!("must be between 1 and {} seconds", MAX_ACCESS_EXPIRY_SECS),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "storefront".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secret_is_rejected() {
        let lookup = |key: &str| match key {
            "JWT_SECRET" => Some("too-short".to_string()),
            _ => None,
        };

        let result = JwtConfig::from_lookup(&lookup);

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                ..
            })
        ));
    }

    #[test]
    fn out_of_range_expiry_is_rejected() {
        for raw in ["0", "-5", "9223372036854775807"] {
            let lookup = |key: &str| match key {
                "JWT_SECRET" => Some("x".repeat(32)),
                "JWT_ACCESS_EXPIRY" => Some(raw.to_string()),
                _ => None,
            };

            assert!(matches!(
                JwtConfig::from_lookup(&lookup),
                Err(ConfigError::Invalid {
                    key: "JWT_ACCESS_EXPIRY",
                    ..
                })
            ));
        }
    }

    #[test]
    fn expiry_and_issuer_can_be_overridden() {
        let lookup = |key: &str| match key {
            "JWT_SECRET" => Some("x".repeat(32)),
            "JWT_ACCESS_EXPIRY" => Some("3600".to_string()),
            "JWT_ISSUER" => Some("shop".to_string()),
            _ => None,
        };

        let config = JwtConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.access_token_expiry, 3600);
        assert_eq!(config.issuer, "shop");
    }
}
