/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 * 4. Set the session cookies and return token and user info
 *
 * The token is only issued after the password check succeeds; both steps
 * live in [`authenticate`].
 *
 * # Rejections
 *
 * - Unknown email: 404 "User doesn't exist"
 * - Wrong password: 401 "Incorrect email or password"
 */

use axum::{
    extract::State,
    response::Json,
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::cookies::add_session_cookies;
use crate::backend::auth::handlers::extract::JsonOrForm;
use crate::backend::auth::handlers::types::{AuthResponse, CredentialsRequest, UserResponse};
use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::error::{BackendError, Result};
use crate::backend::server::state::AppState;

/// Check credentials and issue a session token
///
/// # Errors
///
/// * `UserNotFound` - no account for this email
/// * `InvalidCredentials` - the password does not match
/// * dependency errors from the store, the hasher or token signing
pub async fn authenticate(state: &AppState, request: &CredentialsRequest) -> Result<(User, String)> {
    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::UserNotFound
        })?;

    let valid = state
        .password_hasher
        .verify(&request.password, &user.password_hash)
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = state.session_keys.issue(user.id, &user.email)?;

    Ok((user, token))
}

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
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
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "email": "user@example.com"
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonOrForm(request): JsonOrForm<CredentialsRequest>,
) -> Result<(CookieJar, Json<AuthResponse>)> {
    tracing::info!("Login request for: {}", request.email);

    let (user, token) = authenticate(&state, &request).await?;

    tracing::info!("User logged in successfully: {} ({})", user.email, user.id);

    let jar = add_session_cookies(jar, &state.cookie_settings, token.clone(), &user);

    Ok((
        jar,
        Json(AuthResponse {
            token,
            user: UserResponse {
                id: user.id.to_string(),
                email: user.email,
            },
        }),
    ))
}
