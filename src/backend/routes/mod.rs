//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, CORS and tracing layers
//! - **`auth_routes`** - Signup, login, logout and profile endpoints

/// Main router creation
pub mod router;

/// Authentication endpoints
pub mod auth_routes;

pub use router::create_router;
