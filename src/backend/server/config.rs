/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * and opens the credential store.
 *
 * # Configuration Sources
 *
 * | Variable            | Default                          |
 * |---------------------|----------------------------------|
 * | `DATABASE_URL`      | `sqlite://ticketdesk.db?mode=rwc` |
 * | `JWT_SECRET`        | required                         |
 * | `PORT`              | `3000`                           |
 * | `SESSION_TTL_HOURS` | `720` (30 days)                  |
 * | `BCRYPT_COST`       | `10`                             |
 * | `COOKIE_SECURE`     | `false`                          |
 * | `CORS_ALLOW_ORIGIN` | any origin                       |
 *
 * A `.env` file is read by the binary before this module runs.
 *
 * # Error Handling
 *
 * Unlike optional integrations, the signing secret and the store are
 * required: a missing secret or an unreachable database stops startup.
 */

use std::time::Duration;

use axum::http::HeaderValue;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::backend::auth::password::{MAX_COST, MIN_COST};

/// Default credential store location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://ticketdesk.db?mode=rwc";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default session lifetime: 30 days
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Longest accepted session lifetime: one year
pub const MAX_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Default bcrypt cost
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        name: &'static str,
        reason: String,
    },
}

/// Server configuration
///
/// Read-only after startup; shared with handlers through `AppState`.
#[derive(Clone)]
pub struct ServerConfig {
    /// sqlx connection string for the credential store
    pub database_url: String,
    /// HS256 signing secret for session tokens
    pub jwt_secret: String,
    /// Listen port
    pub port: u16,
    /// Lifetime of session tokens and their cookies
    pub session_ttl: Duration,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
    /// Set the `Secure` attribute on session cookies
    pub cookie_secure: bool,
    /// Single allowed CORS origin; `None` allows any origin
    pub cors_allow_origin: Option<HeaderValue>,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration through `lookup`, which maps a variable name to
    /// its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(port) = lookup("PORT") {
            builder = builder.port(parse_var("PORT", &port)?);
        }
        if let Some(hours) = lookup("SESSION_TTL_HOURS") {
            let hours: u64 = parse_var("SESSION_TTL_HOURS", &hours)?;
            let secs = hours.checked_mul(60 * 60).ok_or(ConfigError::InvalidValue {
                name: "SESSION_TTL_HOURS",
                reason: "too large".to_string(),
            })?;
            builder = builder.session_ttl(Duration::from_secs(secs));
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
        }
        if let Some(secure) = lookup("COOKIE_SECURE") {
            builder = builder.cookie_secure(parse_var("COOKIE_SECURE", &secure)?);
        }
        if let Some(origin) = lookup("CORS_ALLOW_ORIGIN") {
            builder = builder.cors_allow_origin(origin);
        }

        builder.build()
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("jwt_secret", &"<redacted>")
            .field("port", &self.port)
            .field("session_ttl", &self.session_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("cookie_secure", &self.cookie_secure)
            .field("cors_allow_origin", &self.cors_allow_origin)
            .finish()
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    jwt_secret: Option<String>,
    port: Option<u16>,
    session_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    cookie_secure: bool,
    cors_allow_origin: Option<String>,
}

impl ServerConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the session lifetime
    pub fn session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Mark session cookies `Secure`
    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }

    /// Restrict CORS to a single origin
    pub fn cors_allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_allow_origin = Some(origin.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let session_ttl = self.session_ttl.unwrap_or(DEFAULT_SESSION_TTL);
        if session_ttl.is_zero() || session_ttl > MAX_SESSION_TTL {
            return Err(ConfigError::InvalidValue {
                name: "SESSION_TTL_HOURS",
                reason: format!("must be between 1 and {} hours", MAX_SESSION_TTL.as_secs() / 3600),
            });
        }

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST);
        if !(MIN_COST..=MAX_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST",
                reason: format!("must be between {} and {}", MIN_COST, MAX_COST),
            });
        }

        let cors_allow_origin = self
            .cors_allow_origin
            .map(|origin| HeaderValue::from_str(&origin))
            .transpose()
            .map_err(|e| ConfigError::InvalidValue {
                name: "CORS_ALLOW_ORIGIN",
                reason: e.to_string(),
            })?;

        Ok(ServerConfig {
            database_url: self.database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            port: self.port.unwrap_or(DEFAULT_PORT),
            session_ttl,
            bcrypt_cost,
            cookie_secure: self.cookie_secure,
            cors_allow_origin,
        })
    }
}

fn parse_var<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        name,
        reason: e.to_string(),
    })
}

/// Open the credential store and apply migrations
///
/// In-memory URLs get a pool pinned to one connection that is never
/// recycled, since each SQLite memory connection is its own database.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };
    let pool = options.connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Open a private in-memory credential store with migrations applied
///
/// Every call yields an empty, independent database.
pub async fn connect_memory_database() -> Result<SqlitePool, sqlx::Error> {
    connect_database("sqlite::memory:").await
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
