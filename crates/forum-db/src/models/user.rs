//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Public columns of the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Columns needed for a credential check
#[derive(Clone, FromRow)]
pub struct CredentialsModel {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}
