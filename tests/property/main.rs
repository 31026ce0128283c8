//! Property-based tests
//!
//! - Session token issuance and verification
//! - Password hashing
//! - Signup followed by login over HTTP

#[path = "../common/mod.rs"]
mod common;

mod password_proptest;
mod session_proptest;
mod signup_proptest;

/// Runtime for driving async code inside a proptest case
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}
