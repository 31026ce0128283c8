/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * impl the access guard extracts its keys through.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and never mutated afterwards:
 * - Server configuration
 * - Credential store connection pool
 * - Session token keys derived from the signing secret
 * - Password hasher and cookie settings
 *
 * Cloning is cheap: the pool is reference counted and the rest is behind
 * `Arc` or `Copy`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::cookies::CookieSettings;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,

    /// Credential store connection pool
    pub db_pool: SqlitePool,

    /// Session token signing and verification keys
    pub session_keys: Arc<SessionKeys>,

    /// bcrypt hasher with the configured cost
    pub password_hasher: PasswordHasher,

    /// Attributes for the session cookies
    pub cookie_settings: CookieSettings,
}

impl AppState {
    /// Derive the state from the configuration and an open store
    pub fn new(config: ServerConfig, db_pool: SqlitePool) -> Self {
        let session_keys = SessionKeys::new(config.jwt_secret.as_bytes(), config.session_ttl);
        let password_hasher = PasswordHasher::new(config.bcrypt_cost);
        let cookie_settings = CookieSettings {
            max_age: config.session_ttl,
            secure: config.cookie_secure,
        };

        Self {
            config: Arc::new(config),
            db_pool,
            session_keys: Arc::new(session_keys),
            password_hasher,
            cookie_settings,
        }
    }
}

/// Implement FromRef for the session keys
///
/// Used by the access guard extractors.
impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}

/// State over a fresh in-memory store with the cheapest bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    use crate::backend::auth::password::MIN_COST;
    use crate::backend::server::config::connect_memory_database;

    let config = ServerConfig::builder()
        .jwt_secret("test-secret")
        .bcrypt_cost(MIN_COST)
        .build()
        .unwrap();
    let pool = connect_memory_database().await.unwrap();

    AppState::new(config, pool)
}
