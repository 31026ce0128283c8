//! Middleware Module
//!
//! Request-time components that run before handlers.
//!
//! - **`auth`** - Access guard resolving the caller from the session cookie
//!
//! # Example
//!
//! ```rust,no_run
//! use ticketdesk::backend::middleware::{AuthUser, CurrentUser};
//!
//! // Optional identity: never rejects
//! async fn profile(CurrentUser(identity): CurrentUser) { /* ... */ }
//!
//! // Required identity: 401 for anonymous callers
//! async fn my_events(AuthUser(identity): AuthUser) { /* ... */ }
//! ```

pub mod auth;

pub use auth::{identify, AuthUser, CurrentUser, Identity};
