//! Domain entities - core business objects

mod comment;
mod post;
mod subreddit;
mod user;
mod vote;

pub use comment::{Comment, CommentView, NewComment};
pub use post::{NewPost, Post, PostView};
pub use subreddit::{NewSubreddit, Subreddit};
pub use user::{Identity, NewUser, StoredCredentials, User};
pub use vote::{ItemRef, Vote, VoteCounts};
