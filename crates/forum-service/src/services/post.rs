//! Post service
//!
//! Creation and listing of posts, and moderator deletion. Deleting a post
//! takes its comments and every vote on them with it.

use forum_core::entities::{NewPost, PostView};
use forum_core::error::DomainError;
use forum_core::policy::ensure_moderator;
use forum_core::value_objects::RecordId;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_text;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post and return it with author, subreddit and counts
    #[instrument(skip(self, title, content))]
    pub async fn create(
        &self,
        author: &str,
        subreddit_id: RecordId,
        title: &str,
        content: &str,
    ) -> ServiceResult<PostView> {
        require_text("title", title)?;

        let post = self
            .ctx
            .post_repo()
            .create(&NewPost::new(title, content, author, subreddit_id))
            .await?;

        info!(post_id = %post.id, subreddit_id = %subreddit_id, author, "Post created");
        self.get(post.id).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<PostView> {
        self.ctx
            .post_repo()
            .find_view(id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(id).into())
    }

    /// List posts newest first, optionally restricted to one subreddit
    ///
    /// An unknown subreddit is reported as not found rather than as an
    /// empty listing.
    #[instrument(skip(self))]
    pub async fn list(&self, subreddit_id: Option<RecordId>) -> ServiceResult<Vec<PostView>> {
        if let Some(id) = subreddit_id {
            if self.ctx.subreddit_repo().find_by_id(id).await?.is_none() {
                return Err(DomainError::SubredditNotFound(id).into());
            }
        }

        Ok(self.ctx.post_repo().list(subreddit_id).await?)
    }

    /// Delete a post as the moderator of `subreddit_id`
    ///
    /// The post must live in that subreddit and `requester` must be its
    /// creator. Nothing is removed when either check fails.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        post_id: RecordId,
        subreddit_id: RecordId,
        requester: &str,
    ) -> ServiceResult<()> {
        let subreddit = self
            .ctx
            .subreddit_repo()
            .find_by_id(subreddit_id)
            .await?
            .ok_or(DomainError::SubredditNotFound(subreddit_id))?;

        if let Err(e) = ensure_moderator(&subreddit.creator, requester) {
            warn!(%post_id, %subreddit_id, requester, "Post deletion denied");
            return Err(e.into());
        }

        match self.ctx.post_repo().find_by_id(post_id).await? {
            Some(post) if post.belongs_to(subreddit_id) => {}
            _ => return Err(DomainError::PostNotFound(post_id).into()),
        }

        self.ctx.post_repo().delete(post_id).await?;

        info!(%post_id, %subreddit_id, requester, "Post deleted");
        Ok(())
    }
}
