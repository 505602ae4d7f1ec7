/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * POST /api/v1/signup.
 *
 * # Registration Process
 *
 * 1. Look up user by email
 * 2. If found, answer `{"userAlreadyExists": true}` without a token
 * 3. Otherwise store the password per the configured scheme
 * 4. Create user in the store
 * 5. Issue a token carrying the new user's id
 *
 * Any failure along the way becomes a 500 with the signup route message.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::error::{BackendError, BoxError};
use crate::backend::server::state::AppState;

/// Message returned when signup fails
pub const SIGNUP_ERROR: &str = "Internal Error in Signup Route";

fn failure(cause: impl Into<BoxError>) -> BackendError {
    BackendError::internal(SIGNUP_ERROR, cause)
}

/// Sign up handler
///
/// # Arguments
///
/// * `State(state)` - Application state (stores, token service, password scheme)
/// * `payload` - Signup request containing email and password
///
/// # Returns
///
/// `{"userAlreadyExists": false, "jwt": "<token>"}` for a new account,
/// `{"userAlreadyExists": true}` when the email is taken. Both are 200.
///
/// # Errors
///
/// * `500 Internal Server Error` - Unreadable body, store failure, password
///   hashing or token signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/v1/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "a@x.com",
///   "password": "p"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload.map_err(failure)?;
    tracing::info!("Signup request for email: {}", request.email);

    let existing = state
        .users
        .find_user_by_email(&request.email)
        .await
        .map_err(failure)?;

    if existing.is_some() {
        tracing::info!("Email already registered: {}", request.email);
        return Ok(Json(AuthResponse::without_token(true)));
    }

    let password = state.passwords.prepare(&request.password).map_err(failure)?;

    let user = state
        .users
        .create_user(&request.email, &password)
        .await
        .map_err(failure)?;

    let token = state.tokens.issue(user.id).map_err(failure)?;

    tracing::info!("User created successfully: {} ({})", user.email, user.id);

    Ok(Json(AuthResponse::with_token(false, token)))
}
