//! Subreddit entity - a named topic area owned by its creator

use chrono::{DateTime, Utc};

use crate::value_objects::RecordId;

/// Subreddit entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subreddit {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Username of the account that created the subreddit
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

impl Subreddit {
    /// Create a new Subreddit
    pub fn new(id: RecordId, name: String, description: String, creator: String) -> Self {
        Self {
            id,
            name,
            description,
            creator,
            created_at: Utc::now(),
        }
    }

    /// Check if the given username created this subreddit
    #[inline]
    pub fn is_creator(&self, username: &str) -> bool {
        self.creator == username
    }
}

/// Fields supplied when creating a subreddit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubreddit {
    pub name: String,
    pub description: String,
    pub creator: String,
}

impl NewSubreddit {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        creator: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            creator: creator.into(),
        }
    }
}
