//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User model and credential store queries
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT issuance and verification
//! - **`cookies`** - Session cookie construction
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email + password → password hashed → user stored
//! 2. **Login**: email + password → hash verified → token issued → cookies set
//! 3. **Profile**: `token` cookie → token verified → identity returned (or `null`)
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are HS256 JWTs held in an HttpOnly cookie
//! - Tokens and cookies expire together after the configured TTL
//! - Nothing about a session is stored server side

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Session cookies
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, profile, signup};
pub use handlers::{AuthResponse, CredentialsRequest, MessageResponse, UserResponse};
pub use password::PasswordHasher;
pub use sessions::{Claims, SessionKeys, TokenError};
