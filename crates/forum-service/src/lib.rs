//! # forum-service
//!
//! Application layer containing the use-case services, the boolean
//! [`Forum`] facade and the DTOs exchanged with the HTTP layer.

pub mod dto;
pub mod forum;
pub mod services;

pub use dto::*;
pub use forum::Forum;
pub use services::{
    AuthService, CommentService, PostService, ServiceContext, ServiceError,
    ServiceResult, SubredditService, VoteService,
};
