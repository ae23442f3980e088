//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod post;
mod subreddit;
mod user;
mod vote;

pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use subreddit::PgSubredditRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
