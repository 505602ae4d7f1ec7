//! Blog Module
//!
//! Posts and the HTTP handlers that create, update and read them.
//!
//! - **`posts`** - Post model and the `PostStore` trait
//! - **`handlers`** - Handlers for `/blog`, `/{id}` and `/publish`
//!
//! Every blog route sits behind the auth middleware. The author of a post
//! is taken from the `userId` field of the request body.

pub mod handlers;
pub mod posts;

pub use handlers::{create_blog, fetch_blog, publish_blog, update_blog};
pub use posts::{NewPost, Post, PostStore};
