/**
 * Session Tokens
 *
 * This module handles JWT issuance and verification for user sessions.
 * Tokens are signed with HS256 using the server-wide secret and carry the
 * user's id and email. Nothing is stored server side: a token is valid while
 * its signature matches and its `exp` has not passed.
 */

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the user ID out of `sub`
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub)
            .map_err(|e| TokenError::Invalid(format!("Invalid user ID in token: {}", e)))
    }
}

/// Why a session token was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature is fine but `exp` has passed
    #[error("session token has expired")]
    Expired,
    /// Malformed, tampered or signed with another secret
    #[error("invalid session token: {0}")]
    Invalid(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Invalid(err.to_string()),
        }
    }
}

/// Signing and verification keys derived from the server secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionKeys {
    /// Create keys for `secret`; issued tokens live for `ttl`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Create a token for a user, issued now
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, email, unix_now())
    }

    /// Create a token for a user as if issued at `issued_at` (Unix seconds)
    ///
    /// Signing is deterministic: the same claims and timestamp always give
    /// the same token. Fails when `exp` does not fit in a Unix timestamp.
    pub fn issue_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let exp = issued_at
            .checked_add(self.ttl.as_secs())
            .ok_or_else(|| ErrorKind::MissingRequiredClaim("exp".to_string()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: issued_at,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verify and decode a token
    ///
    /// Never panics on malformed input; every failure is a [`TokenError`].
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

fn unix_now() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}
