/**
 * Authentication Handler Types
 *
 * Request and response bodies for signup, signin and the profile stub.
 * Field names follow the public camelCase JSON contract.
 */

use serde::{Deserialize, Serialize};

/// Credentials sent to both signup and signin
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    /// User's email address
    pub email: String,
    /// User's password
    pub password: String,
}

/// Sign up request
pub type SignupRequest = CredentialsRequest;

/// Sign in request
pub type SigninRequest = CredentialsRequest;

/// Auth response
///
/// Returned by signup and signin. `userAlreadyExists` means different
/// things per route:
/// - signup: `true` when the email was already registered (no token)
/// - signin: `true` when the credentials matched a user (token present)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_already_exists: bool,
    /// JWT token, omitted from the JSON when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt: Option<String>,
}

impl AuthResponse {
    /// Response without a token
    pub fn without_token(user_already_exists: bool) -> Self {
        Self {
            user_already_exists,
            jwt: None,
        }
    }

    /// Response carrying a freshly issued token
    pub fn with_token(user_already_exists: bool, jwt: String) -> Self {
        Self {
            user_already_exists,
            jwt: Some(jwt),
        }
    }
}

/// Fixed acknowledgement returned by stub endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
