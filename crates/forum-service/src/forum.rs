//! Boolean forum façade
//!
//! The coarse contract callers without error handling rely on: writes answer
//! `true`/`false`, lookups answer `Option`, listings answer a possibly empty
//! `Vec`. Every failure is logged with its [`ErrorKind`] before it is
//! flattened, so a duplicate username, a denied deletion and an unreachable
//! database remain distinguishable in the logs.
//!
//! [`ErrorKind`]: forum_core::ErrorKind

use forum_core::entities::{CommentView, Identity, ItemRef, PostView, Subreddit, User};
use forum_core::value_objects::{ItemType, RecordId, VoteType};
use tracing::warn;

use crate::services::{
    AuthService, CommentService, PostService, ServiceContext, ServiceResult, SubredditService,
    VoteService,
};

/// Forum operations over a [`ServiceContext`]
#[derive(Debug, Clone)]
pub struct Forum {
    ctx: ServiceContext,
}

impl Forum {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    // === Credential store ===

    pub async fn create_user(&self, username: &str, password: &str, email: &str) -> bool {
        let result = AuthService::new(&self.ctx)
            .create_user(username, password, email)
            .await;
        settle("create_user", result).is_some()
    }

    /// `None` for unknown users, wrong passwords and store failures alike
    pub async fn verify_user(&self, username: &str, password: &str) -> Option<Identity> {
        let result = AuthService::new(&self.ctx)
            .authenticate(username, password)
            .await;
        settle("verify_user", result)
    }

    pub async fn find_user(&self, username: &str) -> Option<User> {
        settle("find_user", AuthService::new(&self.ctx).find_user(username).await)
    }

    // === Content repository ===

    pub async fn create_subreddit(&self, name: &str, description: &str, creator: &str) -> bool {
        let result = SubredditService::new(&self.ctx)
            .create(creator, name, description)
            .await;
        settle("create_subreddit", result).is_some()
    }

    pub async fn get_subreddit(&self, id: RecordId) -> Option<Subreddit> {
        settle("get_subreddit", SubredditService::new(&self.ctx).get(id).await)
    }

    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        author: &str,
        subreddit_id: RecordId,
    ) -> bool {
        let result = PostService::new(&self.ctx)
            .create(author, subreddit_id, title, content)
            .await;
        settle("create_post", result).is_some()
    }

    pub async fn get_post(&self, id: RecordId) -> Option<PostView> {
        settle("get_post", PostService::new(&self.ctx).get(id).await)
    }

    pub async fn create_comment(
        &self,
        content: &str,
        author: &str,
        post_id: RecordId,
        parent_id: Option<RecordId>,
    ) -> bool {
        let result = CommentService::new(&self.ctx)
            .create(author, post_id, content, parent_id)
            .await;
        settle("create_comment", result).is_some()
    }

    /// Delete a post; `false` unless `requester` created `subreddit_id`
    pub async fn delete_post(
        &self,
        post_id: RecordId,
        subreddit_id: RecordId,
        requester: &str,
    ) -> bool {
        let result = PostService::new(&self.ctx)
            .delete(post_id, subreddit_id, requester)
            .await;
        settle("delete_post", result).is_some()
    }

    /// Delete a comment; `false` unless `requester` created the post's subreddit
    pub async fn delete_comment(
        &self,
        comment_id: RecordId,
        post_id: RecordId,
        requester: &str,
    ) -> bool {
        let result = CommentService::new(&self.ctx)
            .delete(comment_id, post_id, requester)
            .await;
        settle("delete_comment", result).is_some()
    }

    // === Vote ledger ===

    /// Record a vote of `1` or `-1`; any other value is rejected
    pub async fn vote_item(
        &self,
        item_id: RecordId,
        username: &str,
        vote_type: i16,
        item_type: ItemType,
    ) -> bool {
        let item = ItemRef::new(item_type, item_id);
        let result = match VoteType::from_value(vote_type) {
            Ok(vote_type) => VoteService::new(&self.ctx).vote(username, item, vote_type).await,
            Err(e) => Err(e.into()),
        };
        settle("vote_item", result).is_some()
    }

    pub async fn vote_post(&self, post_id: RecordId, username: &str, vote_type: i16) -> bool {
        self.vote_item(post_id, username, vote_type, ItemType::Post)
            .await
    }

    /// `(upvotes, downvotes)`; `(0, 0)` when the counts cannot be read
    pub async fn vote_counts(&self, item_id: RecordId, item_type: ItemType) -> (u64, u64) {
        let result = VoteService::new(&self.ctx)
            .counts(ItemRef::new(item_type, item_id))
            .await;
        settle("vote_counts", result).map_or((0, 0), |c| (c.upvotes, c.downvotes))
    }

    // === Query façade ===

    pub async fn list_subreddits(&self) -> Vec<Subreddit> {
        let result = SubredditService::new(&self.ctx).list().await;
        settle("list_subreddits", result).unwrap_or_default()
    }

    pub async fn list_posts(&self, subreddit_id: Option<RecordId>) -> Vec<PostView> {
        let result = PostService::new(&self.ctx).list(subreddit_id).await;
        settle("list_posts", result).unwrap_or_default()
    }

    pub async fn list_comments(&self, post_id: RecordId) -> Vec<CommentView> {
        let result = CommentService::new(&self.ctx).list(post_id).await;
        settle("list_comments", result).unwrap_or_default()
    }
}

fn settle<T>(operation: &'static str, result: ServiceResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(operation, kind = ?err.kind(), error = %err, "Forum operation failed");
            None
        }
    }
}
