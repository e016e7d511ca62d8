use std::env;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

const MAX_RESET_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Settings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Settings {
    fn default() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

/// Process-wide configuration, built once at start-up and handed to the
/// components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub reset_token_ttl_secs: i64,
    pub argon2: Argon2Settings,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(environment, |key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(environment: String, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let jwt = JwtConfig::from_lookup(&lookup)?;

        let reset_token_ttl_secs = parse_or(&lookup, "RESET_TOKEN_TTL_SECS", 600i64)?;
        if !(1..=MAX_RESET_TOKEN_TTL_SECS).contains(&reset_token_ttl_secs) {
            return Err(ConfigError::Invalid {
                key: "RESET_TOKEN_TTL_SECS",
                reason: format!("must be between 1 and {} seconds", MAX_RESET_TOKEN_TTL_SECS),
            });
        }

        let defaults = Argon2Settings::default();
        let argon2 = Argon2Settings {
            memory_kib: parse_or(&lookup, "ARGON2_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(&lookup, "ARGON2_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(&lookup, "ARGON2_PARALLELISM", defaults.parallelism)?,
        };

        Ok(Self {
            environment,
            host,
            port,
            database_url,
            jwt,
            reset_token_ttl_secs,
            argon2,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}
