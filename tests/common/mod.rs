//! Common test utilities and helpers
//!
//! - Database and server fixtures
//! - Authentication test helpers
//! - Response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
