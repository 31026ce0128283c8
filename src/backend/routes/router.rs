/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - `TraceLayer` - one tracing span per request
 * - `CorsLayer` - any origin by default, or a single configured origin
 *   with credentials so the session cookie is sent cross-site
 */

use axum::http::{header::CONTENT_TYPE, Method, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Routes
///
/// - `GET /health` - Liveness probe
/// - authentication routes, see [`configure_auth_routes`]
/// - anything else - 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state);

    let router = Router::new().route(
        "/health",
        get(|| async { Json(serde_json::json!({ "status": "ok" })) }),
    );

    let router = configure_auth_routes(router);

    router
        .fallback(|| async { BackendError::handler(StatusCode::NOT_FOUND, "Not found") })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(app_state: &AppState) -> CorsLayer {
    match &app_state.config.cors_allow_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::permissive(),
    }
}
