//! # forum-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! moderation policy. This crate has no dependencies on infrastructure
//! (database, web framework, etc.).
//!
//! The `test-support` feature adds [`InMemoryForum`], an in-memory store
//! implementing every repository trait.

pub mod entities;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentView, Identity, ItemRef, NewComment, NewPost, NewSubreddit, NewUser, Post,
    PostView, StoredCredentials, Subreddit, User, Vote, VoteCounts,
};
pub use error::{DomainError, ErrorKind};
#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryForum;
pub use policy::{authorize_moderation, ensure_moderator, Decision};
pub use traits::{
    CommentRepository, PostRepository, RepoResult, SubredditRepository, UserRepository,
    VoteRepository,
};
pub use value_objects::{ItemType, RecordId, RecordIdParseError, VoteType};
