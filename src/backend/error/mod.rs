//! Backend Error Module
//!
//! This module defines the error type returned by handlers and middleware.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `Unauthorized` - Missing or invalid bearer token (401)
//! - `Internal` - Any handler failure, with a fixed per-route message (500)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, BoxError, UNAUTHORIZED_MESSAGE};
