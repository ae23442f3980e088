//! PostgreSQL implementation of SubredditRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewSubreddit, Subreddit};
use forum_core::traits::{RepoResult, SubredditRepository};
use forum_core::value_objects::RecordId;

use crate::models::SubredditModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SubredditRepository
#[derive(Clone)]
pub struct PgSubredditRepository {
    pool: PgPool,
}

impl PgSubredditRepository {
    /// Create a new PgSubredditRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubredditRepository for PgSubredditRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Subreddit>> {
        let result = sqlx::query_as::<_, SubredditModel>(
            r"
            SELECT id, name, description, creator, created_at
            FROM subreddits
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Subreddit::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Subreddit>> {
        let results = sqlx::query_as::<_, SubredditModel>(
            r"
            SELECT id, name, description, creator, created_at
            FROM subreddits
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Subreddit::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, subreddit: &NewSubreddit) -> RepoResult<Subreddit> {
        let created = sqlx::query_as::<_, SubredditModel>(
            r"
            INSERT INTO subreddits (name, description, creator)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, creator, created_at
            ",
        )
        .bind(&subreddit.name)
        .bind(&subreddit.description)
        .bind(&subreddit.creator)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Subreddit::from(created))
    }
}
