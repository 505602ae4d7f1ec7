//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and middleware
//! - **`api_routes`** - The `/api/v1` endpoints, split into public and
//!   protected groups
//!
//! # Route Organization
//!
//! | Method | Path              | Auth   |
//! |--------|-------------------|--------|
//! | POST   | `/api/v1/signup`  | none   |
//! | POST   | `/api/v1/signin`  | none   |
//! | PUT    | `/api/v1/profile` | bearer |
//! | POST   | `/api/v1/blog`    | bearer |
//! | PUT    | `/api/v1/blog`    | bearer |
//! | GET    | `/api/v1/{id}`    | bearer |
//! | PUT    | `/api/v1/publish` | bearer |

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
