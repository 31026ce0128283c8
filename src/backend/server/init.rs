/**
 * Server Initialization
 *
 * This module wires the configuration, the credential store and the router
 * into a ready-to-serve Axum application.
 *
 * # Initialization Process
 *
 * 1. Open the credential store and run migrations
 * 2. Derive the application state (signing keys, hasher, cookie settings)
 * 3. Create the router with all routes and layers
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated; the server cannot
/// authenticate anyone without its credential store.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing ticketdesk backend server");

    let db_pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(config, db_pool);

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
