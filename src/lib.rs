//! Inkpost - Blogging Backend Library
//!
//! Inkpost is a small blogging backend built on Axum. Users sign up and sign in
//! with an email and password and receive a JWT; the token then unlocks the
//! blog endpoints for creating, updating and fetching posts.
//!
//! # Overview
//!
//! This library provides:
//! - User signup/signin with token issuance
//! - Bearer-token middleware for protected routes
//! - Post create, update (author-scoped) and fetch-by-id
//! - PostgreSQL persistence through `sqlx`, plus an in-memory store
//!
//! # Module Structure
//!
//! - **`backend`** - Everything server-side
//!   - Server configuration, state and initialization
//!   - Authentication (tokens, passwords, user handlers)
//!   - Blog post handlers
//!   - Credential and post stores
//!   - Middleware, routes and error types
//!
//! # Usage
//!
//! ```rust,ignore
//! use inkpost::backend::server::{config::ServerConfig, init::create_app};
//!
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `BackendError` converts into HTTP responses
//! - Store, token, password and configuration failures have their own types

/// Backend server-side code
pub mod backend;
