//! Service context - dependency container for services
//!
//! Holds the repositories and the token service. Built once at startup and
//! shared behind `Arc`s; it carries no per-request state.

use std::sync::Arc;

use forum_common::auth::JwtService;
#[cfg(any(test, feature = "test-support"))]
use forum_core::memory::InMemoryForum;
use forum_core::traits::{
    CommentRepository, PostRepository, SubredditRepository, UserRepository, VoteRepository,
};
use forum_db::{
    PgCommentRepository, PgPool, PgPostRepository, PgSubredditRepository, PgUserRepository,
    PgVoteRepository,
};


/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    subreddit_repo: Arc<dyn SubredditRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    vote_repo: Arc<dyn VoteRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        subreddit_repo: Arc<dyn SubredditRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repo,
            subreddit_repo,
            post_repo,
            comment_repo,
            vote_repo,
            jwt_service,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgSubredditRepository::new(pool.clone())),
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgCommentRepository::new(pool.clone())),
            Arc::new(PgVoteRepository::new(pool)),
            jwt_service,
        )
    }

    /// Context backed by one in-memory store
    #[cfg(any(test, feature = "test-support"))]
    pub fn in_memory(store: Arc<InMemoryForum>, jwt_service: Arc<JwtService>) -> Self {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            jwt_service,
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the subreddit repository
    pub fn subreddit_repo(&self) -> &dyn SubredditRepository {
        self.subreddit_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish_non_exhaustive()
    }
}
