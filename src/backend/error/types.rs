/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and the
 * authentication middleware.
 *
 * # Error Categories
 *
 * ## Authentication Errors
 *
 * Produced only by the auth middleware when the bearer credential is
 * missing, malformed or fails verification. Always 401.
 *
 * ## Internal Errors
 *
 * Any store failure, signing failure or unreadable request body inside a
 * handler. Always 500, carrying the route's fixed message. The underlying
 * cause is kept as the error source for logging and is never sent to the
 * client.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Boxed cause attached to internal errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Message returned with every 401 response
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust,ignore
/// use inkpost::backend::error::BackendError;
///
/// let err = BackendError::unauthorized("missing Authorization header");
/// let err = BackendError::internal("Internal Error in Signup Route", store_error);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or invalid bearer credential
    ///
    /// `reason` is for logs only; clients always see the same message.
    #[error("Unauthorized: {reason}")]
    Unauthorized {
        /// Why the credential was rejected
        reason: String,
    },

    /// Failure inside a handler
    #[error("{message}")]
    Internal {
        /// Fixed, route-specific message shown to the client
        message: &'static str,
        /// What actually went wrong
        #[source]
        cause: BoxError,
    },
}

impl BackendError {
    /// Create an authentication error
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    /// Create an internal error with a route message and its cause
    ///
    /// # Arguments
    ///
    /// * `message` - Static message returned to the client
    /// * `cause` - Underlying error, kept for logging
    pub fn internal(message: &'static str, cause: impl Into<BoxError>) -> Self {
        Self::Internal {
            message,
            cause: cause.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => UNAUTHORIZED_MESSAGE,
            Self::Internal { message, .. } => message,
        }
    }
}
