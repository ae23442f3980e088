//! Vote count mapper

use forum_core::entities::VoteCounts;

use crate::models::VoteCountsModel;

pub(crate) fn counts(upvotes: i64, downvotes: i64) -> VoteCounts {
    VoteCounts::new(upvotes.max(0) as u64, downvotes.max(0) as u64)
}

impl From<VoteCountsModel> for VoteCounts {
    fn from(model: VoteCountsModel) -> Self {
        counts(model.upvotes, model.downvotes)
    }
}
