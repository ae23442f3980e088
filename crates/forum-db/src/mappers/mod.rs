//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read from the database.
//! Counts come back as `BIGINT` and are clamped at zero on the way in.

mod comment;
mod post;
mod subreddit;
mod user;
mod vote;
