/**
 * Logout Handler
 *
 * POST /logout removes the session cookies from the client. Tokens are not
 * tracked server side, so a copied token stays valid until it expires.
 */

use axum::response::Json;
use axum_extra::extract::CookieJar;

use crate::backend::auth::cookies::remove_session_cookies;
use crate::backend::auth::handlers::types::MessageResponse;

/// Logout handler
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (remove_session_cookies(jar), Json(MessageResponse::new("Logged out")))
}
