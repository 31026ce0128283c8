/**
 * Session Cookies
 *
 * A successful login stores three cookies on the client:
 *
 * - `token` - the signed session token, HttpOnly
 * - `email` - the user's email, readable by client scripts
 * - `user_id` - the user's id, readable by client scripts
 *
 * All three expire together with the token itself.
 */

use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::backend::auth::users::User;

/// Cookie holding the signed session token
pub const SESSION_COOKIE: &str = "token";

/// Convenience cookie holding the user's email
pub const EMAIL_COOKIE: &str = "email";

/// Convenience cookie holding the user's id
pub const USER_ID_COOKIE: &str = "user_id";

/// Attributes shared by every session cookie
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    /// Lifetime of the cookies; matches the token TTL
    pub max_age: Duration,
    /// Whether to set the `Secure` attribute
    pub secure: bool,
}

impl CookieSettings {
    fn build(&self, name: &'static str, value: String, http_only: bool) -> Cookie<'static> {
        let max_age = time::Duration::seconds(i64::try_from(self.max_age.as_secs()).unwrap_or(i64::MAX));

        Cookie::build((name, value))
            .path("/")
            .http_only(http_only)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(max_age)
            .build()
    }
}

/// Add the session cookies for `user` to the jar
pub fn add_session_cookies(jar: CookieJar, settings: &CookieSettings, token: String, user: &User) -> CookieJar {
    jar.add(settings.build(SESSION_COOKIE, token, true))
        .add(settings.build(EMAIL_COOKIE, user.email.clone(), false))
        .add(settings.build(USER_ID_COOKIE, user.id.to_string(), false))
}

/// Remove every session cookie from the client
///
/// Removal cookies are always sent, whether or not the request carried the
/// cookies, so a client holding stale copies is cleared too.
pub fn remove_session_cookies(jar: CookieJar) -> CookieJar {
    [SESSION_COOKIE, EMAIL_COOKIE, USER_ID_COOKIE]
        .into_iter()
        .fold(jar, |jar, name| {
            let mut cookie = Cookie::build((name, "")).path("/").build();
            cookie.make_removal();
            jar.add(cookie)
        })
}
