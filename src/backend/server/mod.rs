//! Server Module
//!
//! This module contains the server-side setup: configuration, application
//! state and initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration, database connection
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds only read-only data after startup: the configuration,
//! the signing keys, the password hasher and the sqlx pool, which handles
//! its own concurrency.

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
