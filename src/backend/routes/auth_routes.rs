/**
 * Authentication Routes
 *
 * - `POST /signup` - User registration
 * - `POST /login` - User login, sets session cookies
 * - `POST /logout` - Clears session cookies
 * - `GET /profile` - Current identity, or `null` without a session
 *
 * All four are public; `/profile` resolves the caller itself and never
 * rejects.
 */

use axum::Router;
use axum::routing::{get, post};

use crate::backend::auth::{login, logout, profile, signup};
use crate::backend::server::state::AppState;

/// Configure authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/profile", get(profile))
}
