//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub subreddit_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Post joined with author, subreddit and aggregated votes (from query)
#[derive(Debug, Clone, FromRow)]
pub struct PostViewModel {
    #[sqlx(flatten)]
    pub post: PostModel,
    pub author_name: String,
    pub subreddit_name: String,
    pub subreddit_creator: String,
    pub upvotes: i64,
    pub downvotes: i64,
}
