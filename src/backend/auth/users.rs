/**
 * User Model and Credential Store
 *
 * This module defines the user record and the store operations the
 * authentication handlers need.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::backend::store::StoreError;

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID), generated on creation
    pub id: Uuid,
    /// User email address, unique across all users
    pub email: String,
    /// Stored password, in the form produced by the configured `PasswordScheme`
    pub password: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Persistence for user credentials
///
/// Users are created on signup and read on signin. Nothing here updates or
/// deletes a user.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by email
    ///
    /// # Returns
    /// User or None if not found
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Create a new user
    ///
    /// # Arguments
    /// * `email` - User email, must not already exist
    /// * `password` - Password as it should be stored
    ///
    /// # Errors
    /// `StoreError::DuplicateEmail` if the email is taken
    async fn create_user(&self, email: &str, password: &str) -> Result<User, StoreError>;
}
