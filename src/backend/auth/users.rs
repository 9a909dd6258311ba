/**
 * User Model and Database Operations
 *
 * This module holds the user row and the PostgreSQL queries behind
 * `PgStore`'s user methods.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User struct representing a user in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (UUID string)
    pub id: String,
    /// User email address (unique)
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Stored credential (bcrypt hash); never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    /// Already-hashed credential
    pub password: String,
}

impl NewUser {
    /// Materialize the row a store will insert
    pub(crate) fn into_user(self) -> User {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            email: self.email,
            name: self.name,
            password: self.password,
            created_at: Utc::now(),
        }
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user` - Email, name and hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(pool: &PgPool, user: NewUser) -> Result<User, sqlx::Error> {
    let user = user.into_user();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, name, password, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, email, name, password, created_at
        "#,
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.password)
    .bind(user.created_at)
    .fetch_one(pool)
    .await
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// List every user, oldest first
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, password, created_at
        FROM users
        ORDER BY created_at, id
        "#,
    )
    .fetch_all(pool)
    .await
}
