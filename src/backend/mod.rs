//! Backend Module
//!
//! This module contains all server-side code for Inkpost. It provides an
//! Axum HTTP server exposing the `/api/v1` blogging API.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Tokens, password scheme, signup/signin/profile handlers
//! - **`blog`** - Post handlers (create, update, fetch, publish)
//! - **`store`** - `UserStore`/`PostStore` traits with Postgres and in-memory backends
//! - **`middleware`** - Bearer token authentication
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── blog/           - Blog post handlers
//! ├── store/          - Persistence
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an immutable `AppState` holding the store handles, the
//! token service and the password scheme. Nothing in it is mutated per
//! request; the database pool is created once per process.
//!
//! # Error Handling
//!
//! - `BackendError` for everything a handler can return
//! - 401 from the auth middleware, 500 with a route-specific message otherwise
//! - Lookups that find nothing are ordinary 200 responses

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Blog post handlers
pub mod blog;

/// Credential and post persistence
pub mod store;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
