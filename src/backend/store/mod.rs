//! Store Module
//!
//! Persistence for users and posts. Handlers only see the `UserStore` and
//! `PostStore` traits; two backends implement both:
//!
//! - **`postgres`** - `PgStore`, a shared `sqlx` connection pool
//! - **`memory`** - `MemoryStore`, process-local maps used by tests and
//!   database-less development runs
//!
//! Both backends enforce the same rules: one user per email, and a post's
//! author must be an existing user.

use thiserror::Error;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use crate::backend::auth::users::{User, UserStore};
pub use crate::backend::blog::posts::{NewPost, Post, PostStore};
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("a user with email {0} already exists")]
    DuplicateEmail(String),

    #[error("author {0} does not exist")]
    UnknownAuthor(Uuid),
}
