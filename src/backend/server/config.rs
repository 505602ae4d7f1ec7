/**
 * Server Configuration
 *
 * This module loads the settings the server needs at startup from
 * environment variables. `main` calls `ServerConfig::from_env()` once,
 * after `dotenv` has read an optional `.env` file. Handlers never read the
 * environment; everything they need is passed in through `AppState`.
 *
 * # Variables
 *
 * | Variable                   | Required | Default     |
 * |----------------------------|----------|-------------|
 * | `JWT_SECRET`               | yes      |             |
 * | `DATABASE_URL`             | yes      |             |
 * | `SERVER_PORT`              | no       | `3000`      |
 * | `DATABASE_MAX_CONNECTIONS` | no       | `5`         |
 * | `PASSWORD_SCHEME`          | no       | `plaintext` |
 * | `BCRYPT_COST`              | no       | `12`        |
 *
 * # Error Handling
 *
 * Unlike optional services, a missing secret or database URL stops the
 * server: there is nothing useful it can do without them.
 */

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::backend::auth::passwords::PasswordScheme;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but cannot be used
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings read at startup
#[derive(Clone)]
pub struct ServerConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Postgres connection string
    pub database_url: String,
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Pool size
    pub max_connections: u32,
    pub password_scheme: PasswordScheme,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("password_scheme", &self.password_scheme)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when `JWT_SECRET` or `DATABASE_URL` is
    /// unset, and `ConfigError::Invalid` when an optional value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary lookup function
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable, or `None` when unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = required(&lookup, "JWT_SECRET")?;
        let database_url = required(&lookup, "DATABASE_URL")?;
        let port = parsed(&lookup, "SERVER_PORT", DEFAULT_PORT)?;
        let max_connections = parsed(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let password_scheme = password_scheme(&lookup)?;

        Ok(Self {
            jwt_secret,
            database_url,
            port,
            max_connections,
            password_scheme,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

fn password_scheme<F>(lookup: &F) -> Result<PasswordScheme, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let scheme = lookup("PASSWORD_SCHEME").unwrap_or_else(|| "plaintext".to_string());

    match scheme.trim().to_ascii_lowercase().as_str() {
        "plaintext" => Ok(PasswordScheme::Plaintext),
        "bcrypt" => {
            let cost = parsed(lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
            // bcrypt only accepts costs in 4..=31
            if !(4..=31).contains(&cost) {
                return Err(ConfigError::Invalid {
                    name: "BCRYPT_COST",
                    value: cost.to_string(),
                    reason: "must be between 4 and 31".to_string(),
                });
            }
            Ok(PasswordScheme::Bcrypt { cost })
        }
        _ => Err(ConfigError::Invalid {
            name: "PASSWORD_SCHEME",
            value: scheme,
            reason: "expected plaintext or bcrypt".to_string(),
        }),
    }
}
