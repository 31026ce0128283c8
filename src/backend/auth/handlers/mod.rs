//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── extract.rs  - JSON-or-form body extractor
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie removal
//! └── profile.rs  - Current identity handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - User authentication, sets session cookies
//! - **`logout`** - POST /logout - Clears session cookies
//! - **`profile`** - GET /profile - Current identity or `null`

/// Request and response types
pub mod types;

/// Request body extraction
pub mod extract;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Current identity handler
pub mod profile;

pub use types::{AuthResponse, CredentialsRequest, MessageResponse, UserResponse};

pub use login::{authenticate, login};
pub use logout::logout;
pub use profile::profile;
pub use signup::{register_user, signup};
