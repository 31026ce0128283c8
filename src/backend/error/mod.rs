//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - **Conflict** - duplicate account (400)
//! - **UserNotFound / InvalidCredentials** - rejected login (404 / 401)
//! - **Unauthorized** - protected route without a session (401)
//! - **Store / Hashing / Token / Task** - dependency failures (500, generic message)
//!
//! Session token verification failures are not part of this type: the access
//! guard turns them into an anonymous caller instead.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};

/// Result alias for handlers
pub type Result<T, E = BackendError> = std::result::Result<T, E>;
