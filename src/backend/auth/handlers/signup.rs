/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password presence
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in the credential store
 *
 * Signup does not sign the user in; the client follows up with /login.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::extract::JsonOrForm;
use crate::backend::auth::handlers::types::{CredentialsRequest, MessageResponse};
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation, User};
use crate::backend::error::{BackendError, Result};
use crate::backend::server::state::AppState;

/// Register a new account
///
/// # Errors
///
/// * `ValidationError` - malformed email or empty password
/// * `Conflict` - an account with this email already exists
/// * dependency errors from the store or the hasher
pub async fn register_user(state: &AppState, request: &CredentialsRequest) -> Result<User> {
    request.validate().map_err(|(field, message)| {
        tracing::warn!("Signup rejected, invalid {}", field);
        BackendError::validation(field, message)
    })?;

    if get_user_by_email(&state.db_pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("Email already registered"));
    }

    let password_hash = state.password_hasher.hash(&request.password).await?;

    // A concurrent signup can still win the race past the lookup above.
    create_user(&state.db_pool, request.email.clone(), password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already exists: {}", request.email);
                BackendError::conflict("Email already registered")
            } else {
                e.into()
            }
        })
}

/// Sign up handler
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User created successfully" }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    JsonOrForm(request): JsonOrForm<CredentialsRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    tracing::info!("Signup request for: {}", request.email);

    let user = register_user(&state, &request).await?;

    tracing::info!("User created successfully: {} ({})", user.email, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}
