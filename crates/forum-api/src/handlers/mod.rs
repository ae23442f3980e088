//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod comments;
pub mod health;
pub mod posts;
pub mod subreddits;
pub mod users;
pub mod votes;
