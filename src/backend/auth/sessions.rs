/**
 * Session Tokens
 *
 * This module issues and verifies the JWTs handed out by signup and signin.
 *
 * The payload is just `{ "id": <user id> }`, signed HS256 with the secret
 * from `ServerConfig`. No expiry is set, so a token stays valid as long as
 * the secret does. A token that happens to carry an `exp` claim is still
 * rejected once it has expired.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: String,
}

/// Token signing or verification failure
#[derive(Debug, Error)]
#[error("token error: {0}")]
pub struct TokenError(#[from] jsonwebtoken::errors::Error);

/// Issues and verifies session tokens
///
/// Cheap to clone; the keys are built once from the secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service for the given secret
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no exp claim; only check it when present
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a JWT token for a user
    ///
    /// # Arguments
    /// * `user_id` - User ID, carried as the `id` claim
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(&self, user_id: impl ToString) -> Result<String, TokenError> {
        let claims = Claims {
            id: user_id.to_string(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify and decode a JWT token
    ///
    /// # Errors
    /// Malformed token, signature mismatch, or an expired `exp` claim
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}
