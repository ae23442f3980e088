//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Comment, CommentView, NewComment};
use forum_core::error::DomainError;
use forum_core::traits::{CommentRepository, RepoResult};
use forum_core::value_objects::RecordId;

use crate::models::{CommentModel, CommentViewModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, author, post_id, parent_id, created_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_post(&self, post_id: RecordId) -> RepoResult<Vec<CommentView>> {
        let results = sqlx::query_as::<_, CommentViewModel>(
            r"
            SELECT c.id, c.content, c.author, c.post_id, c.parent_id, c.created_at,
                   u.username AS author_name,
                   COALESCE(v.upvotes, 0) AS upvotes,
                   COALESCE(v.downvotes, 0) AS downvotes
            FROM comments c
            JOIN users u ON u.username = c.author
            LEFT JOIN (
                SELECT item_id,
                       COUNT(*) FILTER (WHERE vote_type = 1) AS upvotes,
                       COUNT(*) FILTER (WHERE vote_type = -1) AS downvotes
                FROM votes
                WHERE item_type = 'comment'
                GROUP BY item_id
            ) v ON v.item_id = c.id
            WHERE c.post_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            ",
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CommentView::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let created = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (content, author, post_id, parent_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, author, post_id, parent_id, created_at
            ",
        )
        .bind(&comment.content)
        .bind(&comment.author)
        .bind(comment.post_id.into_inner())
        .bind(comment.parent_id.map(RecordId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Comment::from(created))
    }

    /// Replies lose their parent through `ON DELETE SET NULL`
    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked =
            sqlx::query_scalar::<_, i64>("SELECT id FROM comments WHERE id = $1 FOR UPDATE")
                .bind(id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(DomainError::CommentNotFound(id));
        }

        sqlx::query("DELETE FROM votes WHERE item_type = 'comment' AND item_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommentRepository>();
    }
}
