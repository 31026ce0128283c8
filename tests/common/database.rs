//! Database and server fixtures
//!
//! Every fixture owns a private in-memory SQLite store, so tests never share
//! users and can run in parallel.

use axum_test::TestServer;
use sqlx::SqlitePool;
use ticketdesk::backend::auth::password::MIN_COST;
use ticketdesk::backend::routes::create_router;
use ticketdesk::backend::server::config::connect_memory_database;
use ticketdesk::backend::server::{AppState, ServerConfig};

/// Secret the fixtures sign session tokens with
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Configuration with the cheapest bcrypt cost
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_JWT_SECRET)
        .bcrypt_cost(MIN_COST)
        .build()
        .expect("valid test configuration")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new, empty, migrated database
    pub async fn new() -> Self {
        let pool = connect_memory_database()
            .await
            .expect("Failed to create test database");
        Self { pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of accounts registered under `email`
    pub async fn count_users(&self, email: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count users")
    }
}

/// Running application over a fresh database
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub db: TestDatabase,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: ServerConfig) -> Self {
        let db = TestDatabase::new().await;
        let state = AppState::new(config, db.pool().clone());
        let server = TestServer::new(create_router(state.clone()))
            .expect("Failed to start test server");

        Self { server, state, db }
    }
}
