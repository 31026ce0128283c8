/**
 * Access Guard
 *
 * Resolves the caller's identity from the `token` session cookie.
 *
 * A missing cookie and a cookie whose token fails verification both resolve
 * to an anonymous caller. Verification failures are logged and never reach
 * the client as errors; routes that need a signed-in user use [`AuthUser`],
 * which answers anonymous callers with 401.
 */

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::cookies::SESSION_COOKIE;
use crate::backend::auth::sessions::{Claims, SessionKeys, TokenError};
use crate::backend::error::BackendError;

/// Authenticated caller, as carried by a valid session token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

impl TryFrom<Claims> for Identity {
    type Error = TokenError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.user_id()?,
            email: claims.email,
        })
    }
}

/// Resolve the identity behind the session cookie, if any
pub fn identify(jar: &CookieJar, keys: &SessionKeys) -> Option<Identity> {
    let token = jar.get(SESSION_COOKIE)?;

    match keys.verify(token.value()).and_then(Identity::try_from) {
        Ok(identity) => Some(identity),
        Err(e) => {
            tracing::warn!("Rejected session cookie: {}", e);
            None
        }
    }
}

/// Extractor for the optional caller identity
///
/// Never rejects: anonymous callers get `CurrentUser(None)`.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Arc<SessionKeys>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = Arc::<SessionKeys>::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(CurrentUser(identify(&jar, &keys)))
    }
}

/// Extractor for routes that require a signed-in caller
///
/// Rejects anonymous callers with 401 Unauthorized.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<SessionKeys>: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let CurrentUser(identity) = match CurrentUser::from_request_parts(parts, state).await {
            Ok(current) => current,
            Err(never) => match never {},
        };

        identity.map(AuthUser).ok_or(BackendError::Unauthorized)
    }
}
