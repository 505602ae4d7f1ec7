/**
 * Signin Handler
 *
 * This module implements the user authentication handler for
 * POST /api/v1/signin.
 *
 * # Authentication Process
 *
 * 1. Look up the user whose email AND password both match
 * 2. No match: answer `{"userAlreadyExists": false}` (200, no token)
 * 3. Match: issue a token and answer `{"userAlreadyExists": true, "jwt": ...}`
 *
 * Wrong password and unknown email produce the same response.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, SigninRequest};
use crate::backend::error::{BackendError, BoxError};
use crate::backend::server::state::AppState;

/// Message returned when signin fails
pub const SIGNIN_ERROR: &str = "Internal Error in Signin Route";

fn failure(cause: impl Into<BoxError>) -> BackendError {
    BackendError::internal(SIGNIN_ERROR, cause)
}

/// Sign in handler
///
/// # Arguments
///
/// * `State(state)` - Application state
/// * `payload` - Signin request containing email and password
///
/// # Errors
///
/// * `500 Internal Server Error` - Unreadable body, store failure or token
///   signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "userAlreadyExists": true,
///   "jwt": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn signin(
    State(state): State<AppState>,
    payload: Result<Json<SigninRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload.map_err(failure)?;
    tracing::info!("Signin request for email: {}", request.email);

    let user = state
        .users
        .find_user_by_email(&request.email)
        .await
        .map_err(failure)?
        .filter(|user| state.passwords.matches(&request.password, &user.password));

    let Some(user) = user else {
        tracing::warn!("Signin rejected for email: {}", request.email);
        return Ok(Json(AuthResponse::without_token(false)));
    };

    let token = state.tokens.issue(user.id).map_err(failure)?;

    tracing::info!("User signed in successfully: {} ({})", user.email, user.id);

    Ok(Json(AuthResponse::with_token(true, token)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::passwords::PasswordScheme;
    use crate::backend::auth::sessions::TokenService;
    use crate::backend::store::{MemoryStore, UserStore};

    fn request(email: &str, password: &str) -> Result<Json<SigninRequest>, JsonRejection> {
        Ok(Json(SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        }))
    }

    async fn seeded(passwords: PasswordScheme) -> (AppState, uuid::Uuid) {
        let store = MemoryStore::new();
        let stored = passwords.prepare("password123").unwrap();
        let user = store.create_user("test@example.com", &stored).await.unwrap();
        let state = AppState::new(store, TokenService::new("signin-secret"), passwords);
        (state, user.id)
    }

    #[tokio::test]
    async fn test_signin_success() {
        let (state, user_id) = seeded(PasswordScheme::Plaintext).await;

        let Json(response) = signin(
            State(state.clone()),
            request("test@example.com", "password123"),
        )
        .await
        .unwrap();

        assert!(response.user_already_exists);
        let claims = state.tokens.verify(&response.jwt.unwrap()).unwrap();
        assert_eq!(claims.id, user_id.to_string());
    }

    #[tokio::test]
    async fn test_signin_invalid_password() {
        let (state, _) = seeded(PasswordScheme::Plaintext).await;

        let Json(response) = signin(State(state), request("test@example.com", "wrongpassword"))
            .await
            .unwrap();

        assert_eq!(response, AuthResponse::without_token(false));
    }

    #[tokio::test]
    async fn test_signin_user_not_found() {
        let (state, _) = seeded(PasswordScheme::Plaintext).await;

        let Json(response) = signin(
            State(state),
            request("nonexistent@example.com", "password123"),
        )
        .await
        .unwrap();

        assert_eq!(response, AuthResponse::without_token(false));
    }

    #[tokio::test]
    async fn test_signin_with_bcrypt_scheme() {
        let (state, user_id) = seeded(PasswordScheme::Bcrypt { cost: 4 }).await;

        let Json(ok) = signin(
            State(state.clone()),
            request("test@example.com", "password123"),
        )
        .await
        .unwrap();
        let claims = state.tokens.verify(&ok.jwt.unwrap()).unwrap();
        assert_eq!(claims.id, user_id.to_string());

        let Json(denied) = signin(State(state), request("test@example.com", "password124"))
            .await
            .unwrap();
        assert!(!denied.user_already_exists);
    }
}
