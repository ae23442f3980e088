//! Vote entity and aggregated counts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ItemType, RecordId, VoteType};

/// Reference to a votable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemRef {
    pub item_type: ItemType,
    pub item_id: RecordId,
}

impl ItemRef {
    pub const fn new(item_type: ItemType, item_id: RecordId) -> Self {
        Self { item_type, item_id }
    }

    pub const fn post(id: RecordId) -> Self {
        Self::new(ItemType::Post, id)
    }

    pub const fn comment(id: RecordId) -> Self {
        Self::new(ItemType::Comment, id)
    }
}

impl std::fmt::Display for ItemRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.item_type, self.item_id)
    }
}

/// One row of the vote ledger
///
/// At most one exists per (username, item); a later vote replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub username: String,
    pub item: ItemRef,
    pub vote_type: VoteType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote
    pub fn new(username: String, item: ItemRef, vote_type: VoteType) -> Self {
        let now = Utc::now();
        Self {
            username,
            item,
            vote_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the direction of an existing vote
    pub fn change_to(&mut self, vote_type: VoteType) {
        self.vote_type = vote_type;
        self.updated_at = Utc::now();
    }
}

/// Upvote and downvote totals for one item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl VoteCounts {
    pub const fn new(upvotes: u64, downvotes: u64) -> Self {
        Self { upvotes, downvotes }
    }

    /// Net score: upvotes minus downvotes
    #[inline]
    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    /// Count one more vote in the given direction
    pub fn record(&mut self, vote_type: VoteType) {
        match vote_type {
            VoteType::Up => self.upvotes += 1,
            VoteType::Down => self.downvotes += 1,
        }
    }
}

impl<'a> FromIterator<&'a VoteType> for VoteCounts {
    fn from_iter<I: IntoIterator<Item = &'a VoteType>>(iter: I) -> Self {
        let mut counts = Self::default();
        for vote in iter {
            counts.record(*vote);
        }
        counts
    }
}
