//! Comment entity

use chrono::{DateTime, Utc};

use super::VoteCounts;
use crate::value_objects::RecordId;

/// Comment on a post
///
/// `parent_id` is stored for replies but listings stay flat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: RecordId,
    pub content: String,
    pub author: String,
    pub post_id: RecordId,
    pub parent_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: RecordId,
        content: String,
        author: String,
        post_id: RecordId,
        parent_id: Option<RecordId>,
    ) -> Self {
        Self {
            id,
            content,
            author,
            post_id,
            parent_id,
            created_at: Utc::now(),
        }
    }

    /// Check if the comment is attached to the given post
    #[inline]
    pub fn belongs_to(&self, post_id: RecordId) -> bool {
        self.post_id == post_id
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// Fields supplied when creating a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub author: String,
    pub post_id: RecordId,
    pub parent_id: Option<RecordId>,
}

impl NewComment {
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        post_id: RecordId,
        parent_id: Option<RecordId>,
    ) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            post_id,
            parent_id,
        }
    }
}

/// Comment as listed: joined with author and live vote counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub comment: Comment,
    pub author_name: String,
    pub votes: VoteCounts,
}
