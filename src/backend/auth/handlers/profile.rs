/**
 * Profile Handler
 *
 * GET /profile returns the identity behind the session cookie, or `null`
 * when the caller has no valid session. It never fails.
 */

use axum::response::Json;

use crate::backend::middleware::auth::{CurrentUser, Identity};

/// Get current user handler
///
/// # Example Response
///
/// ```json
/// { "id": "123e4567-e89b-12d3-a456-426614174000", "email": "user@example.com" }
/// ```
pub async fn profile(CurrentUser(identity): CurrentUser) -> Json<Option<Identity>> {
    if let Some(identity) = &identity {
        tracing::debug!("Profile lookup for: {}", identity.email);
    }
    Json(identity)
}
