//! Subreddit service

use forum_core::entities::{NewSubreddit, Subreddit};
use forum_core::error::DomainError;
use forum_core::value_objects::RecordId;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_text;

/// Subreddit service
pub struct SubredditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubredditService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a subreddit owned by `creator`
    ///
    /// The creator becomes the only user allowed to delete posts and
    /// comments in it.
    #[instrument(skip(self, description))]
    pub async fn create(
        &self,
        creator: &str,
        name: &str,
        description: &str,
    ) -> ServiceResult<Subreddit> {
        require_text("name", name)?;

        let subreddit = self
            .ctx
            .subreddit_repo()
            .create(&NewSubreddit::new(name, description, creator))
            .await?;

        info!(subreddit_id = %subreddit.id, name, creator, "Subreddit created");
        Ok(subreddit)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<Subreddit> {
        self.ctx
            .subreddit_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::SubredditNotFound(id).into())
    }

    /// All subreddits, newest first
    pub async fn list(&self) -> ServiceResult<Vec<Subreddit>> {
        Ok(self.ctx.subreddit_repo().list().await?)
    }
}
