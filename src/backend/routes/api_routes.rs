/**
 * API Route Configuration
 *
 * This module defines the `/api/v1` endpoints.
 *
 * # Routes
 *
 * ## Public
 * - `POST /signup` - User registration
 * - `POST /signin` - User sign in
 *
 * ## Protected (bearer token)
 * - `PUT /profile` - Profile update stub
 * - `POST /blog` - Create a post
 * - `PUT /blog` - Update a post
 * - `GET /{id}` - Fetch a post
 * - `PUT /publish` - Publish stub
 *
 * Protected routes carry the auth middleware as a route layer, so a request
 * without a valid token is answered with 401 before any handler runs.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{signin, signup, update_profile};
use crate::backend::blog::{create_blog, fetch_blog, publish_blog, update_blog};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Build the `/api/v1` router
///
/// # Arguments
///
/// * `app_state` - Needed by the auth middleware to verify tokens
///
/// # Returns
///
/// Public and protected routes merged into one router, to be nested under
/// `/api/v1`
pub fn configure_api_routes(app_state: &AppState) -> Router<AppState> {
    public_routes().merge(protected_routes(app_state))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

fn protected_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", put(update_profile))
        .route("/blog", post(create_blog).put(update_blog))
        .route("/publish", put(publish_blog))
        .route("/{id}", get(fetch_blog))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware))
}
