//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use forum_core::value_objects::{RecordId, VoteType};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Content Requests
// ============================================================================

/// Create subreddit request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubredditRequest {
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,
}

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 40000, message = "Content must be at most 40000 characters"))]
    pub content: String,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 10000, message = "Comment must be 1-10000 characters"))]
    pub content: String,

    /// Comment being replied to
    #[serde(default)]
    pub parent_id: Option<RecordId>,
}

/// Cast or change a vote; `vote_type` is `1` or `-1`
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct VoteRequest {
    pub vote_type: VoteType,
}

/// Query string of `GET /posts`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListPostsQuery {
    pub subreddit_id: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_register_passwords_must_match() {
        assert!(register("pw1", "pw1").validate().is_ok());

        let errors = register("pw1", "pw2").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirm_password"));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let mut request = register("pw1", "pw1");
        request.email = "not-an-email".to_string();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_empty_title_is_invalid() {
        let request = CreatePostRequest {
            title: String::new(),
            content: "body".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_vote_request_json() {
        let vote: VoteRequest = serde_json::from_str(r#"{"vote_type": -1}"#).unwrap();
        assert_eq!(vote.vote_type, VoteType::Down);
        assert!(serde_json::from_str::<VoteRequest>(r#"{"vote_type": 0}"#).is_err());
    }

    #[test]
    fn test_comment_request_defaults() {
        let request: CreateCommentRequest =
            serde_json::from_str(r#"{"content": "nice"}"#).unwrap();
        assert!(request.parent_id.is_none());

        let reply: CreateCommentRequest =
            serde_json::from_str(r#"{"content": "nice", "parent_id": 3}"#).unwrap();
        assert_eq!(reply.parent_id, Some(RecordId::new(3)));
    }
}
