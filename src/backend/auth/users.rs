/**
 * User Model and Credential Store
 *
 * This module handles user records and their database operations.
 * Users are created on signup and never mutated afterwards.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// User struct representing a row of the `users` table
///
/// Not `Serialize`: the password hash never reaches a
/// response body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4, assigned on creation)
    pub id: Uuid,
    /// User email address (unique, case-sensitive as stored)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error. A duplicate email fails with a unique-constraint
/// violation, see [`is_unique_violation`].
pub async fn create_user(
    pool: &SqlitePool,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, email, password_hash, created_at
        "#
    )
    .bind(id)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE email = $1
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Whether a store error is the `UNIQUE(email)` constraint firing
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
