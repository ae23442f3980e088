//! Subreddit database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for subreddits table
#[derive(Debug, Clone, FromRow)]
pub struct SubredditModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}
