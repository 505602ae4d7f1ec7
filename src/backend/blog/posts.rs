//! Post model and post store

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::store::StoreError;

/// A blog post as stored and as returned by `GET /api/v1/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// ID of the user who wrote the post
    pub author_id: Uuid,
}

/// Fields for a post that does not exist yet
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// Persistence for blog posts
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post and return it with its generated id.
    ///
    /// Fails with `StoreError::UnknownAuthor` when `author_id` names no user.
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Replace title and content of the post matching both `id` and `author_id`.
    ///
    /// Returns `None` when no post matches the pair; nothing is written then.
    async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, StoreError>;

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post {
            id: Uuid::nil(),
            title: "Hello".to_string(),
            content: "World".to_string(),
            author_id: Uuid::nil(),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["authorId"], Uuid::nil().to_string());
        assert!(value.get("author_id").is_none());
    }
}
