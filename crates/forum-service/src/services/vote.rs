//! Vote service (vote ledger use cases)
//!
//! One vote per user per item. Voting again replaces the earlier vote.

use forum_core::entities::{ItemRef, VoteCounts};
use forum_core::value_objects::{RecordId, VoteType};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_text;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record `username`'s vote on an item and return the item's new counts
    ///
    /// The voter does not have to be a registered user.
    #[instrument(skip(self, item), fields(item = %item))]
    pub async fn vote(
        &self,
        username: &str,
        item: ItemRef,
        vote_type: VoteType,
    ) -> ServiceResult<VoteCounts> {
        require_text("username", username)?;

        self.ctx.vote_repo().upsert(username, item, vote_type).await?;
        let counts = self.ctx.vote_repo().counts(item).await?;

        debug!(
            username,
            upvotes = counts.upvotes,
            downvotes = counts.downvotes,
            "Vote recorded"
        );
        Ok(counts)
    }

    pub async fn vote_post(
        &self,
        username: &str,
        post_id: RecordId,
        vote_type: VoteType,
    ) -> ServiceResult<VoteCounts> {
        self.vote(username, ItemRef::post(post_id), vote_type).await
    }

    /// Up and down counts for an item; an item nobody voted on has (0, 0)
    pub async fn counts(&self, item: ItemRef) -> ServiceResult<VoteCounts> {
        Ok(self.ctx.vote_repo().counts(item).await?)
    }

    /// The vote `username` currently holds on an item, if any
    pub async fn current_vote(
        &self,
        username: &str,
        item: ItemRef,
    ) -> ServiceResult<Option<VoteType>> {
        Ok(self.ctx.vote_repo().find(username, item).await?)
    }
}
