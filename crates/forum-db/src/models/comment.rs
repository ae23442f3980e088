//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub content: String,
    pub author: String,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with author and aggregated votes (from query)
#[derive(Debug, Clone, FromRow)]
pub struct CommentViewModel {
    #[sqlx(flatten)]
    pub comment: CommentModel,
    pub author_name: String,
    pub upvotes: i64,
    pub downvotes: i64,
}
