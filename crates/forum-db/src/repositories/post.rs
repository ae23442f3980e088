//! PostgreSQL implementation of PostRepository
//!
//! Listings join the author and subreddit and aggregate the vote ledger in
//! the same query, so counts are always live.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewPost, Post, PostView};
use forum_core::error::DomainError;
use forum_core::traits::{PostRepository, RepoResult};
use forum_core::value_objects::RecordId;

use crate::models::{PostModel, PostViewModel};

use super::error::map_db_error;

const POST_VIEW_SELECT: &str = r"
    SELECT p.id, p.title, p.content, p.author, p.subreddit_id, p.created_at,
           u.username AS author_name,
           s.name AS subreddit_name,
           s.creator AS subreddit_creator,
           COALESCE(v.upvotes, 0) AS upvotes,
           COALESCE(v.downvotes, 0) AS downvotes
    FROM posts p
    JOIN users u ON u.username = p.author
    JOIN subreddits s ON s.id = p.subreddit_id
    LEFT JOIN (
        SELECT item_id,
               COUNT(*) FILTER (WHERE vote_type = 1) AS upvotes,
               COUNT(*) FILTER (WHERE vote_type = -1) AS downvotes
        FROM votes
        WHERE item_type = 'post'
        GROUP BY item_id
    ) v ON v.item_id = p.id
";

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, content, author, subreddit_id, created_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_view(&self, id: RecordId) -> RepoResult<Option<PostView>> {
        let sql = format!("{POST_VIEW_SELECT} WHERE p.id = $1");
        let result = sqlx::query_as::<_, PostViewModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(PostView::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, subreddit_id: Option<RecordId>) -> RepoResult<Vec<PostView>> {
        let sql = format!(
            "{POST_VIEW_SELECT}
            WHERE ($1::BIGINT IS NULL OR p.subreddit_id = $1)
            ORDER BY p.created_at DESC, p.id DESC"
        );
        let results = sqlx::query_as::<_, PostViewModel>(&sql)
            .bind(subreddit_id.map(RecordId::into_inner))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostView::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let created = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (title, content, author, subreddit_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, author, subreddit_id, created_at
            ",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author)
        .bind(post.subreddit_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(created))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Concurrent votes on the post or its comments wait on these locks
        let locked =
            sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
                .bind(id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(DomainError::PostNotFound(id));
        }

        sqlx::query("SELECT id FROM comments WHERE post_id = $1 FOR UPDATE")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query(
            r"
            DELETE FROM votes
            WHERE (item_type = 'post' AND item_id = $1)
               OR (item_type = 'comment'
                   AND item_id IN (SELECT id FROM comments WHERE post_id = $1))
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        // Dropping the transaction rolls back
        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
