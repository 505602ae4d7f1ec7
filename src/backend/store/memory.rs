//! In-memory store
//!
//! Keeps users and posts in process-local maps. Follows the same rules as
//! the Postgres schema (unique email, post author must exist) and counts
//! every store call, which lets tests assert that a rejected request never
//! reached persistence.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewPost, Post, PostStore, StoreError, User, UserStore};

/// In-memory user and post store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    /// Users keyed by id
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    /// Email index (email -> user id)
    emails: Arc<RwLock<HashMap<String, Uuid>>>,
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
    operations: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store calls made so far, across clones
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    fn record(&self) {
        self.operations.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.record();

        let emails = self.emails.read().await;
        let Some(id) = emails.get(email) else {
            return Ok(None);
        };
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create_user(&self, email: &str, password: &str) -> Result<User, StoreError> {
        self.record();

        // Hold the index lock across the check and the insert
        let mut emails = self.emails.write().await;
        if emails.contains_key(email) {
            return Err(StoreError::DuplicateEmail(email.to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: Utc::now(),
        };
        emails.insert(user.email.clone(), user.id);
        self.users.write().await.insert(user.id, user.clone());

        tracing::debug!("User stored in memory: {}", user.email);
        Ok(user)
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        self.record();

        if !self.users.read().await.contains_key(&post.author_id) {
            return Err(StoreError::UnknownAuthor(post.author_id));
        }

        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
        };
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update_post(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, StoreError> {
        self.record();

        let mut posts = self.posts.write().await;
        match posts.get_mut(&id) {
            Some(post) if post.author_id == author_id => {
                post.title = title.to_string();
                post.content = content.to_string();
                Ok(Some(post.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        self.record();
        Ok(self.posts.read().await.get(&id).cloned())
    }
}
