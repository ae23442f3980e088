//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use forum_core::entities::{
    Comment, CommentView, Identity, ItemRef, PostView, Subreddit, User, VoteCounts,
};

use super::responses::{
    CommentResponse, CurrentUserResponse, PostResponse, SubredditResponse, UserResponse,
    VoteCountsResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&Identity> for UserResponse {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<Subreddit> for SubredditResponse {
    fn from(subreddit: Subreddit) -> Self {
        Self {
            id: subreddit.id,
            name: subreddit.name,
            description: subreddit.description,
            creator: subreddit.creator,
            created_at: subreddit.created_at,
        }
    }
}

impl From<PostView> for PostResponse {
    fn from(view: PostView) -> Self {
        let score = view.score();
        let post = view.post;
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            author_name: view.author_name,
            subreddit_id: post.subreddit_id,
            subreddit_name: view.subreddit_name,
            subreddit_creator: view.subreddit_creator,
            upvotes: view.votes.upvotes,
            downvotes: view.votes.downvotes,
            score,
            created_at: post.created_at,
        }
    }
}

impl From<CommentView> for CommentResponse {
    fn from(view: CommentView) -> Self {
        let comment = view.comment;
        Self {
            id: comment.id,
            content: comment.content,
            author: comment.author,
            author_name: view.author_name,
            post_id: comment.post_id,
            parent_id: comment.parent_id,
            upvotes: view.votes.upvotes,
            downvotes: view.votes.downvotes,
            score: view.votes.score(),
            created_at: comment.created_at,
        }
    }
}

/// A freshly created comment has no votes yet
impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self::from(CommentView {
            author_name: comment.author.clone(),
            comment,
            votes: VoteCounts::default(),
        })
    }
}

impl From<(ItemRef, VoteCounts)> for VoteCountsResponse {
    fn from((item, votes): (ItemRef, VoteCounts)) -> Self {
        Self {
            item_type: item.item_type,
            item_id: item.item_id,
            upvotes: votes.upvotes,
            downvotes: votes.downvotes,
            score: votes.score(),
            your_vote: None,
        }
    }
}
