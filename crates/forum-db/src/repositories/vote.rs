//! PostgreSQL implementation of VoteRepository (vote ledger)

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{ItemRef, VoteCounts};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, VoteRepository};
use forum_core::value_objects::{ItemType, VoteType};

use crate::models::VoteCountsModel;

use super::error::map_db_error;

/// Upsert guarded by an existence check on the voted table.
///
/// One statement: a concurrent second vote by the same user hits the
/// primary key and becomes an update instead of a second row. `FOR SHARE`
/// blocks on a delete holding the item's row lock, and finds nothing once
/// that delete commits.
fn upsert_sql(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Post => {
            r"
            INSERT INTO votes (username, item_type, item_id, vote_type)
            SELECT $1, $2, $3, $4
            WHERE EXISTS (SELECT 1 FROM posts WHERE id = $3 FOR SHARE)
            ON CONFLICT (username, item_type, item_id)
            DO UPDATE SET vote_type = EXCLUDED.vote_type, updated_at = NOW()
            "
        }
        ItemType::Comment => {
            r"
            INSERT INTO votes (username, item_type, item_id, vote_type)
            SELECT $1, $2, $3, $4
            WHERE EXISTS (SELECT 1 FROM comments WHERE id = $3 FOR SHARE)
            ON CONFLICT (username, item_type, item_id)
            DO UPDATE SET vote_type = EXCLUDED.vote_type, updated_at = NOW()
            "
        }
    }
}

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, username: &str, item: ItemRef, vote_type: VoteType) -> RepoResult<()> {
        let result = sqlx::query(upsert_sql(item.item_type))
            .bind(username)
            .bind(item.item_type.as_str())
            .bind(item.item_id.into_inner())
            .bind(vote_type.value())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(match item.item_type {
                ItemType::Post => DomainError::PostNotFound(item.item_id),
                ItemType::Comment => DomainError::CommentNotFound(item.item_id),
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn counts(&self, item: ItemRef) -> RepoResult<VoteCounts> {
        let result = sqlx::query_as::<_, VoteCountsModel>(
            r"
            SELECT COUNT(*) FILTER (WHERE vote_type = 1) AS upvotes,
                   COUNT(*) FILTER (WHERE vote_type = -1) AS downvotes
            FROM votes
            WHERE item_type = $1 AND item_id = $2
            ",
        )
        .bind(item.item_type.as_str())
        .bind(item.item_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(VoteCounts::from(result))
    }

    #[instrument(skip(self))]
    async fn find(&self, username: &str, item: ItemRef) -> RepoResult<Option<VoteType>> {
        let result = sqlx::query_scalar::<_, i16>(
            r"
            SELECT vote_type
            FROM votes
            WHERE username = $1 AND item_type = $2 AND item_id = $3
            ",
        )
        .bind(username)
        .bind(item.item_type.as_str())
        .bind(item.item_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(VoteType::try_from).transpose()
    }
}
