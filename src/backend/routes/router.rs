/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` traces every request and response
 * - The auth middleware is attached by `api_routes` to protected routes only
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Base path of the public API
pub const API_PREFIX: &str = "/api/v1";

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Stores, token service and password scheme
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let api = configure_api_routes(&app_state);

    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
