//! Test fixtures and data generators
//!
//! Names are randomized so tests can share one database.

use serde::{Deserialize, Serialize};

/// Short random suffix for unique names
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: "pw1".to_string(),
            confirm_password: "pw1".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// Public user
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

/// Current user profile
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Create subreddit request
#[derive(Debug, Serialize)]
pub struct CreateSubredditRequest {
    pub name: String,
    pub description: String,
}

impl CreateSubredditRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("sub{}", unique_suffix()),
            description: "desc".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubredditResponse {
    pub id: i64,
    pub name: String,
    pub creator: String,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: "body".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub author_name: String,
    pub subreddit_id: i64,
    pub subreddit_creator: String,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    #[serde(default)]
    pub your_vote: Option<i16>,
}

/// Create comment request
#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub parent_id: Option<i64>,
    pub upvotes: u64,
    pub downvotes: u64,
}

/// Vote request
#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub vote_type: i16,
}

#[derive(Debug, Deserialize)]
pub struct VoteCountsResponse {
    pub item_type: String,
    pub item_id: i64,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    #[serde(default)]
    pub your_vote: Option<i16>,
}
