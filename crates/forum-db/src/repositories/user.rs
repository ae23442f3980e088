//! PostgreSQL implementation of UserRepository (credential store)

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewUser, StoredCredentials, User};
use forum_core::traits::{RepoResult, UserRepository};

use crate::models::{CredentialsModel, UserModel};

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, created_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_credentials(&self, username: &str) -> RepoResult<Option<StoredCredentials>> {
        let result = sqlx::query_as::<_, CredentialsModel>(
            r"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(StoredCredentials::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let created = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, password_hash, email)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, created_at
            ",
        )
        .bind(&user.username)
        .bind(password_hash)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(created))
    }
}
