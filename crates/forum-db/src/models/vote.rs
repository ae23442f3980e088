//! Vote aggregate model

use sqlx::FromRow;

/// Up/down totals for one item (from query)
#[derive(Debug, Clone, Copy, Default, FromRow)]
pub struct VoteCountsModel {
    pub upvotes: i64,
    pub downvotes: i64,
}
