//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the user routes.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── signin.rs   - User authentication handler
//! └── profile.rs  - Profile update stub
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/signup - User registration
//! - **`signin`** - POST /api/v1/signin - User authentication
//! - **`update_profile`** - PUT /api/v1/profile - Acknowledgement only (protected)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Profile update stub
pub mod profile;

pub use types::{AuthResponse, CredentialsRequest, MessageResponse, SigninRequest, SignupRequest};

pub use profile::update_profile;
pub use signin::signin;
pub use signup::signup;
