/**
 * Authentication Middleware
 *
 * This module protects routes that require a signed-in user. It extracts
 * and verifies the JWT from the Authorization header and makes the
 * decoded identity available to handlers.
 *
 * A request that fails here is answered with 401 and never reaches the
 * handler, so no store call is made for it.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The `id` claim of the verified token
    pub id: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it with the token service
/// 3. Attaches the decoded identity to request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| BackendError::unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| BackendError::unauthorized("Authorization header is not valid text"))?;

    let token = bearer_token(auth_header)
        .ok_or_else(|| BackendError::unauthorized("Invalid Authorization header format"))?;

    let claims = tokens
        .verify(token)
        .map_err(|e| BackendError::unauthorized(format!("Invalid token: {}", e)))?;

    tracing::debug!("Authenticated request for user {}", claims.id);
    request
        .extensions_mut()
        .insert(AuthenticatedUser { id: claims.id });

    Ok(next.run(request).await)
}

/// Extract the token from a `Bearer <token>` header value
///
/// The scheme is matched case-insensitively; the value must consist of
/// exactly the scheme and one token.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token)
}

/// Axum extractor for authenticated user
///
/// Use as a handler parameter on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| BackendError::unauthorized("AuthenticatedUser not found in request extensions"))?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    const SECRET: &str = "middleware-secret";

    fn protected_app() -> Router {
        let tokens = TokenService::new(SECRET);
        Router::new()
            .route("/whoami", get(|AuthUser(user): AuthUser| async move { user.id }))
            .route_layer(from_fn_with_state(tokens, auth_middleware))
    }

    async fn status_for(authorization: Option<&str>) -> StatusCode {
        let mut request = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        protected_app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer abc def"), None);
    }

    #[tokio::test]
    async fn test_missing_header_rejected() {
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_invalid_token_rejected() {
        assert_eq!(
            status_for(Some("Bearer invalid_token")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn test_foreign_token_rejected() {
        let token = TokenService::new("someone-else").issue("user-1").unwrap();
        let header = format!("Bearer {}", token);
        assert_eq!(status_for(Some(&header)).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let token = TokenService::new(SECRET).issue("user-1").unwrap();

        let response = protected_app()
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"user-1");
    }

    #[tokio::test]
    async fn test_extractor_without_middleware() {
        let app = Router::new().route("/whoami", get(|AuthUser(user): AuthUser| async move { user.id }));
        let response = app
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
