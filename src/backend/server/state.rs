/**
 * Application State Management
 *
 * This module defines the application state shared by all handlers and
 * implements the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The credential store (`UserStore`)
 * - The post store (`PostStore`)
 * - The token service holding the signing secret
 * - The password scheme
 *
 * Everything is built once at startup from `ServerConfig` and never
 * mutated afterwards. Cloning is cheap: stores sit behind `Arc`.
 *
 * # Example
 *
 * ```rust,ignore
 * use inkpost::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let user = state.users.find_user_by_email("a@x.com").await;
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::passwords::PasswordScheme;
use crate::backend::auth::sessions::TokenService;
use crate::backend::store::{PostStore, UserStore};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Credential store used by signup and signin
    pub users: Arc<dyn UserStore>,

    /// Post store used by the blog handlers
    pub posts: Arc<dyn PostStore>,

    /// Issues and verifies session tokens
    pub tokens: TokenService,

    /// How passwords are stored and compared
    pub passwords: PasswordScheme,
}

impl AppState {
    /// Build state around a single store implementing both traits
    ///
    /// # Arguments
    ///
    /// * `store` - Backend for users and posts (Postgres or in-memory)
    /// * `tokens` - Token service built from the configured secret
    /// * `passwords` - Password scheme from configuration
    pub fn new<S>(store: S, tokens: TokenService, passwords: PasswordScheme) -> Self
    where
        S: UserStore + PostStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            posts: store,
            tokens,
            passwords,
        }
    }
}

/// Implement FromRef for TokenService
///
/// This allows the auth middleware to extract the token service directly
/// using `State(TokenService)`.
impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
