//! Backend Module
//!
//! Server-side code for the ticketdesk backend: an Axum HTTP server with
//! account signup, login and cookie-based sessions.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, session tokens, handlers
//! - **`middleware`** - Access guard resolving the caller from the session cookie
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Request Flow
//!
//! ```text
//! POST /signup  -> validate -> hash password -> store user      -> 201
//! POST /login   -> find user -> verify hash -> issue token      -> 200 + cookies
//! GET  /profile -> token cookie -> verify token -> identity      -> 200 (or null)
//! ```

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
