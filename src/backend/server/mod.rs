//! Server Module
//!
//! Startup code for the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`config`** - `ServerConfig` loaded from the environment
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - Builds the application from a config
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env()`
//! 2. **Store**: connect the Postgres pool and run migrations
//! 3. **State Creation**: stores, token service and password scheme
//! 4. **Router Creation**: routes and middleware
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
