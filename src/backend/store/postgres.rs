/**
 * PostgreSQL Store
 *
 * `PgStore` wraps one process-wide `PgPool`. It is created at startup and
 * cloned into the application state; every handler shares the same pool.
 *
 * # Schema
 *
 * Tables are created by the migrations in `migrations/`:
 * - `users (id, email UNIQUE, password, created_at)`
 * - `posts (id, title, content, author_id REFERENCES users)`
 *
 * Constraint violations are mapped to `StoreError::DuplicateEmail` and
 * `StoreError::UnknownAuthor`; everything else stays `StoreError::Database`.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::{NewPost, Post, PostStore, StoreError, User, UserStore};

/// Postgres-backed user and post store
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a connection pool
    ///
    /// # Arguments
    /// * `database_url` - Postgres connection string
    /// * `max_connections` - Upper bound on pooled connections
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        tracing::info!("Database connection pool created successfully");
        Ok(Self::new(pool))
    }

    /// Run the embedded migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password, created_at
            "#,
        )
        .bind(id)
        .bind(email)
        .bind(password)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::DuplicateEmail(email.to_string())
            }
            other => StoreError::Database(other),
        })?;

        Ok(user)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let id = Uuid::new_v4();
        let author_id = post.author_id;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, title, content, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author_id
            "#,
        )
        .bind(id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                StoreError::UnknownAuthor(author_id)
            }
            other => StoreError::Database(other),
        })?;

        Ok(post)
    }

    async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, content = $2
            WHERE id = $3 AND author_id = $4
            RETURNING id, title, content, author_id
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }
}
