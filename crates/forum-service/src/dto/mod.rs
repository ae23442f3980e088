//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreatePostRequest, CreateSubredditRequest, ListPostsQuery,
    LoginRequest, RegisterRequest, VoteRequest,
};

pub use responses::{
    AuthResponse, CommentResponse, CurrentUserResponse, HealthChecks, HealthResponse,
    PostResponse, ReadinessResponse, SubredditResponse, UserResponse, VoteCountsResponse,
};
