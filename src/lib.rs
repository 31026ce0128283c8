//! Ticketdesk - Event Ticketing Backend
//!
//! Account management and sessions for an event ticketing site. Users sign
//! up with an email and password, log in to receive a signed session token
//! in an HttpOnly cookie, and later requests are attributed to them through
//! that cookie.
//!
//! # Usage
//!
//! ```rust,no_run
//! use ticketdesk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Handlers return `backend::error::BackendError`, which maps every failure
//! to one HTTP status. Invalid session tokens are not errors: the caller is
//! treated as anonymous.

/// Backend server-side code
pub mod backend;
