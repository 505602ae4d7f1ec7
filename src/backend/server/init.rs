/**
 * Server Initialization
 *
 * This module builds the Axum application from a loaded `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Connect the process-wide Postgres pool
 * 2. Run the embedded migrations
 * 3. Build the token service and application state
 * 4. Create the router
 *
 * Unlike optional services, a database that cannot be reached or migrated
 * aborts startup.
 */

use axum::Router;

use crate::backend::auth::passwords::PasswordScheme;
use crate::backend::auth::sessions::TokenService;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{PgStore, StoreError};

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Settings loaded at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails when the database cannot be reached or the migrations fail.
pub async fn create_app(config: &ServerConfig) -> Result<Router, StoreError> {
    tracing::info!("Initializing inkpost backend server");

    let store = PgStore::connect(&config.database_url, config.max_connections).await?;
    store.migrate().await?;

    if config.password_scheme == PasswordScheme::Plaintext {
        tracing::warn!(
            "Passwords are stored and compared as plain text; set PASSWORD_SCHEME=bcrypt for new deployments"
        );
    } else {
        tracing::info!("Password scheme: {}", config.password_scheme.name());
    }

    let app_state = AppState::new(
        store,
        TokenService::new(&config.jwt_secret),
        config.password_scheme,
    );

    Ok(create_router(app_state))
}
