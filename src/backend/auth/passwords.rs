/**
 * Password Scheme
 *
 * Decides how a password is stored on signup and how a candidate is checked
 * on signin.
 *
 * `Plaintext` is the default and keeps passwords as given, compared by exact
 * equality. This preserves the existing database contents and client
 * behavior, and it is a known weakness: anyone with read access to the
 * `users` table sees every password. The server logs a warning at startup
 * while it is active.
 *
 * `Bcrypt` hashes on signup and verifies with bcrypt on signin. It must be
 * chosen explicitly through `PASSWORD_SCHEME=bcrypt`, and only on a fresh
 * database: existing plaintext rows will not verify under it.
 */

use thiserror::Error;

/// Password hashing failure
#[derive(Debug, Error)]
#[error("password hashing error: {0}")]
pub struct PasswordError(#[from] bcrypt::BcryptError);

/// How passwords are stored and compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    /// Stored as given, compared by equality
    #[default]
    Plaintext,
    /// Stored as a bcrypt hash with the given cost
    Bcrypt { cost: u32 },
}

impl PasswordScheme {
    /// Bcrypt with the library's default cost
    pub fn bcrypt() -> Self {
        Self::Bcrypt {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Produce the value to store for a new user's password
    pub fn prepare(&self, password: &str) -> Result<String, PasswordError> {
        match self {
            Self::Plaintext => Ok(password.to_string()),
            Self::Bcrypt { cost } => Ok(bcrypt::hash(password, *cost)?),
        }
    }

    /// Check a candidate password against a stored value
    ///
    /// A stored value that is not a valid bcrypt hash simply does not match.
    pub fn matches(&self, candidate: &str, stored: &str) -> bool {
        match self {
            Self::Plaintext => candidate == stored,
            Self::Bcrypt { .. } => bcrypt::verify(candidate, stored).unwrap_or_else(|e| {
                tracing::warn!("Stored password is not a valid bcrypt hash: {:?}", e);
                false
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Bcrypt { .. } => "bcrypt",
        }
    }
}
