//! Authentication Module
//!
//! This module handles user registration, sign in and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User record and the `UserStore` trait
//! - **`sessions`** - JWT issuing and verification
//! - **`passwords`** - How passwords are stored and compared
//! - **`handlers`** - HTTP handlers for the user routes
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → token returned
//! 2. **Signin**: email and password → credentials matched → token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → token verified
//!    by the auth middleware → handler runs
//!
//! Tokens carry only the user id and never expire. A token whose `exp`
//! claim is present is still rejected once it has passed.

/// User data model and store trait
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Password storage schemes
pub mod passwords;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, MessageResponse, SigninRequest, SignupRequest};
pub use handlers::{signin, signup, update_profile};
pub use passwords::PasswordScheme;
pub use sessions::{Claims, TokenService};
