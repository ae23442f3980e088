//! Repository ports

mod repositories;

pub use repositories::{
    CommentRepository, PostRepository, RepoResult, SubredditRepository, UserRepository,
    VoteRepository,
};
