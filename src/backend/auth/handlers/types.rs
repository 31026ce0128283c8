/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers.
 */

use serde::{Deserialize, Serialize};

/// Credentials submitted to signup and login
///
/// Accepted as JSON or as an url-encoded form body.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage, never logged)
    pub password: String,
}

impl CredentialsRequest {
    /// Basic shape checks applied before signup touches the store
    pub fn validate(&self) -> Result<(), (&'static str, &'static str)> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(("email", "Invalid email format"));
        }
        if self.password.is_empty() {
            return Err(("password", "Password cannot be empty"));
        }
        Ok(())
    }
}

/// Plain message response
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Auth response
///
/// Returned by the login handler alongside the session cookies.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Session token (same value as the `token` cookie)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
}
