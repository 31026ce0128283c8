/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both operations are CPU-bound, so they
 * run on tokio's blocking pool instead of the request's executor thread.
 */

use crate::backend::error::Result;

/// Smallest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Largest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Salted one-way password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// Hashing the same input twice yields two different strings, both of
    /// which verify.
    pub async fn hash(&self, password: &str) -> Result<String> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch. An unparseable stored hash is an
    /// error, not a mismatch.
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(valid)
    }
}
