/**
 * Error Conversion
 *
 * Backend errors implement `IntoResponse`, so handlers and middleware can
 * return them directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Internal Error in Signup Route",
 *   "status": 500
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Internal errors are logged with their cause here, so handlers only
    /// need to build the error.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        match &self {
            BackendError::Unauthorized { reason } => {
                tracing::warn!("Rejected request: {}", reason);
            }
            BackendError::Internal { cause, .. } => {
                tracing::error!("{}: {:?}", message, cause);
            }
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, StatusCode};

    #[test]
    fn test_unauthorized_response() {
        let response = BackendError::unauthorized("no token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_internal_response_status() {
        let response =
            BackendError::internal("Internal Error occurred while updating blog", "no row")
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
