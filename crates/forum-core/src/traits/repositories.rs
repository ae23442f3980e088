//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; `forum-db` provides the
//! PostgreSQL implementation and [`crate::memory`] an in-process one.

use async_trait::async_trait;

use crate::entities::{
    Comment, CommentView, ItemRef, NewComment, NewPost, NewSubreddit, NewUser, Post, PostView,
    StoredCredentials, Subreddit, User, VoteCounts,
};
use crate::error::DomainError;
use crate::value_objects::{RecordId, VoteType};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository (credential store)
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Load id, username and password hash for a credential check
    async fn find_credentials(&self, username: &str) -> RepoResult<Option<StoredCredentials>>;

    /// Insert a new user with an already hashed password
    ///
    /// Fails with `UsernameTaken` / `EmailTaken` without touching the
    /// existing row.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;
}

// ============================================================================
// Subreddit Repository
// ============================================================================

#[async_trait]
pub trait SubredditRepository: Send + Sync {
    /// Find subreddit by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Subreddit>>;

    /// List all subreddits, newest first
    async fn list(&self) -> RepoResult<Vec<Subreddit>>;

    /// Create a new subreddit
    async fn create(&self, subreddit: &NewSubreddit) -> RepoResult<Subreddit>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Post>>;

    /// Find a post together with author, subreddit and vote counts
    async fn find_view(&self, id: RecordId) -> RepoResult<Option<PostView>>;

    /// List posts newest first, optionally restricted to one subreddit
    async fn list(&self, subreddit_id: Option<RecordId>) -> RepoResult<Vec<PostView>>;

    /// Create a new post
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Delete a post with its comments and every vote on either
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Comment>>;

    /// List comments of a post, newest first
    async fn list_by_post(&self, post_id: RecordId) -> RepoResult<Vec<CommentView>>;

    /// Create a new comment
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Delete a comment and its votes, detaching any replies
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository (vote ledger)
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Insert or replace the vote of `username` on `item`
    ///
    /// Fails with the item's not-found error if it does not exist.
    async fn upsert(&self, username: &str, item: ItemRef, vote_type: VoteType)
        -> RepoResult<()>;

    /// Count up and down votes on an item
    async fn counts(&self, item: ItemRef) -> RepoResult<VoteCounts>;

    /// Current vote of a user on an item, if any
    async fn find(&self, username: &str, item: ItemRef) -> RepoResult<Option<VoteType>>;
}
