//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and building session cookies.

use axum_extra::extract::cookie::Cookie;
use uuid::Uuid;
use ticketdesk::backend::auth::cookies::SESSION_COOKIE;
use ticketdesk::backend::auth::users::create_user;
use ticketdesk::backend::server::AppState;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user directly in the store, bypassing the HTTP layer
pub async fn create_test_user(
    state: &AppState,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = state.password_hasher.hash(password).await?;
    let user = create_user(&state.db_pool, email.to_string(), password_hash).await?;
    let token = state.session_keys.issue(user.id, &user.email)?;

    Ok(TestUser {
        id: user.id,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(
    state: &AppState,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(state, &email, "test_password_123").await
}

/// Session cookie carrying `token`
pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, token.to_string())
}

/// JSON credentials body
pub fn credentials(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}
