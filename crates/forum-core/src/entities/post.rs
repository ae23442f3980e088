//! Post entity and its annotated read model

use chrono::{DateTime, Utc};

use super::VoteCounts;
use crate::value_objects::RecordId;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub subreddit_id: RecordId,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(
        id: RecordId,
        title: String,
        content: String,
        author: String,
        subreddit_id: RecordId,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author,
            subreddit_id,
            created_at: Utc::now(),
        }
    }

    /// Check if the post lives in the given subreddit
    #[inline]
    pub fn belongs_to(&self, subreddit_id: RecordId) -> bool {
        self.subreddit_id == subreddit_id
    }
}

/// Fields supplied when creating a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub subreddit_id: RecordId,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        subreddit_id: RecordId,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            subreddit_id,
        }
    }
}

/// Post as listed: joined with author, subreddit and live vote counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostView {
    pub post: Post,
    pub author_name: String,
    pub subreddit_name: String,
    pub subreddit_creator: String,
    pub votes: VoteCounts,
}

impl PostView {
    /// Net score of the post
    #[inline]
    pub fn score(&self) -> i64 {
        self.votes.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to() {
        let post = Post::new(
            RecordId::new(10),
            "hi".to_string(),
            "body".to_string(),
            "alice".to_string(),
            RecordId::new(2),
        );
        assert!(post.belongs_to(RecordId::new(2)));
        assert!(!post.belongs_to(RecordId::new(3)));
    }
}
