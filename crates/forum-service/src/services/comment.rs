//! Comment service

use forum_core::entities::{Comment, CommentView, NewComment};
use forum_core::error::DomainError;
use forum_core::policy::ensure_moderator;
use forum_core::value_objects::RecordId;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_text;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a post, optionally as a reply to another comment
    ///
    /// A reply's parent must be a comment on the same post.
    #[instrument(skip(self, content))]
    pub async fn create(
        &self,
        author: &str,
        post_id: RecordId,
        content: &str,
        parent_id: Option<RecordId>,
    ) -> ServiceResult<Comment> {
        require_text("content", content)?;
        self.require_post(post_id).await?;

        if let Some(parent_id) = parent_id {
            match self.ctx.comment_repo().find_by_id(parent_id).await? {
                Some(parent) if parent.belongs_to(post_id) => {}
                Some(_) => {
                    return Err(ServiceError::validation(
                        "parent comment belongs to a different post",
                    ))
                }
                None => return Err(DomainError::CommentNotFound(parent_id).into()),
            }
        }

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment::new(content, author, post_id, parent_id))
            .await?;

        info!(comment_id = %comment.id, %post_id, author, "Comment created");
        Ok(comment)
    }

    /// Comments on a post, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, post_id: RecordId) -> ServiceResult<Vec<CommentView>> {
        self.require_post(post_id).await?;
        Ok(self.ctx.comment_repo().list_by_post(post_id).await?)
    }

    /// Delete a comment as the moderator of the post's subreddit
    ///
    /// Replies to the deleted comment stay and become top-level.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        comment_id: RecordId,
        post_id: RecordId,
        requester: &str,
    ) -> ServiceResult<()> {
        let post = self.require_post(post_id).await?;
        let subreddit = self
            .ctx
            .subreddit_repo()
            .find_by_id(post.subreddit_id)
            .await?
            .ok_or(DomainError::SubredditNotFound(post.subreddit_id))?;

        if let Err(e) = ensure_moderator(&subreddit.creator, requester) {
            warn!(%comment_id, %post_id, requester, "Comment deletion denied");
            return Err(e.into());
        }

        match self.ctx.comment_repo().find_by_id(comment_id).await? {
            Some(comment) if comment.belongs_to(post_id) => {}
            _ => return Err(DomainError::CommentNotFound(comment_id).into()),
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(%comment_id, %post_id, requester, "Comment deleted");
        Ok(())
    }

    async fn require_post(&self, post_id: RecordId) -> ServiceResult<forum_core::Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::context;
    use crate::services::{AuthService, PostService, SubredditService};

    async fn seed(ctx: &ServiceContext) -> RecordId {
        let auth = AuthService::new(ctx);
        auth.create_user("alice", "pw1", "alice@example.com")
            .await
            .unwrap();
        auth.create_user("bob", "pw2", "bob@example.com")
            .await
            .unwrap();
        let sub = SubredditService::new(ctx)
            .create("alice", "golang", "")
            .await
            .unwrap()
            .id;
        PostService::new(ctx)
            .create("bob", sub, "Hi", "")
            .await
            .unwrap()
            .post
            .id
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let (ctx, _) = context();
        let post = seed(&ctx).await;
        let comments = CommentService::new(&ctx);

        let parent = comments.create("alice", post, "nice", None).await.unwrap();
        let reply = comments
            .create("bob", post, "thanks", Some(parent.id))
            .await
            .unwrap();
        assert!(reply.is_reply());

        let listed = comments.list(post).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].comment.id, reply.id);
        assert_eq!(listed[1].author_name, "alice");
    }

    #[tokio::test]
    async fn test_reply_parent_must_be_on_same_post() {
        let (ctx, _) = context();
        let post = seed(&ctx).await;
        let sub = PostService::new(&ctx).get(post).await.unwrap().post.subreddit_id;
        let other_post = PostService::new(&ctx)
            .create("alice", sub, "Other", "")
            .await
            .unwrap()
            .post
            .id;
        let comments = CommentService::new(&ctx);
        let parent = comments.create("alice", post, "nice", None).await.unwrap();

        assert!(matches!(
            comments
                .create("bob", other_post, "wrong", Some(parent.id))
                .await,
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(
            comments
                .create("bob", post, "dangling", Some(RecordId::new(999)))
                .await,
            Err(ServiceError::Domain(DomainError::CommentNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let (ctx, _) = context();
        seed(&ctx).await;
        let result = CommentService::new(&ctx)
            .create("bob", RecordId::new(999), "hello", None)
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::Domain(DomainError::PostNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_delete_requires_creator_and_detaches_replies() {
        let (ctx, _) = context();
        let post = seed(&ctx).await;
        let comments = CommentService::new(&ctx);
        let parent = comments.create("bob", post, "parent", None).await.unwrap();
        let reply = comments
            .create("bob", post, "reply", Some(parent.id))
            .await
            .unwrap();

        assert!(matches!(
            comments.delete(parent.id, post, "bob").await,
            Err(ServiceError::Domain(DomainError::NotSubredditCreator))
        ));
        assert_eq!(comments.list(post).await.unwrap().len(), 2);

        comments.delete(parent.id, post, "alice").await.unwrap();
        let listed = comments.list(post).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].comment.id, reply.id);
        assert_eq!(listed[0].comment.parent_id, None);
    }
}
