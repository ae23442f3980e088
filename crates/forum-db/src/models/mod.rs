//! Database models
//!
//! Row shapes returned by queries, derived with SQLx `FromRow`.

mod comment;
mod post;
mod subreddit;
mod user;
mod vote;

pub use comment::{CommentModel, CommentViewModel};
pub use post::{PostModel, PostViewModel};
pub use subreddit::SubredditModel;
pub use user::{CredentialsModel, UserModel};
pub use vote::VoteCountsModel;
