//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use forum_core::value_objects::{ItemType, RecordId, VoteType};
use serde::Serialize;

// ============================================================================
// Auth & User Responses
// ============================================================================

/// Login response with access token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Public user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: RecordId,
    pub username: String,
}

/// Current user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Content Responses
// ============================================================================

/// Subreddit response
#[derive(Debug, Clone, Serialize)]
pub struct SubredditResponse {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

/// Post with author, subreddit and live vote counts
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_name: String,
    pub subreddit_id: RecordId,
    pub subreddit_name: String,
    pub subreddit_creator: String,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// Comment with author and live vote counts
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: RecordId,
    pub content: String,
    pub author: String,
    pub author_name: String,
    pub post_id: RecordId,
    pub parent_id: Option<RecordId>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

/// Vote totals for one item
#[derive(Debug, Clone, Serialize)]
pub struct VoteCountsResponse {
    pub item_type: ItemType,
    pub item_id: RecordId,
    pub upvotes: u64,
    pub downvotes: u64,
    pub score: i64,
    /// The caller's own vote, present only on authenticated requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub your_vote: Option<VoteType>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        assert_eq!(HealthResponse::healthy().status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }

    #[test]
    fn test_vote_counts_json() {
        let response = VoteCountsResponse {
            item_type: ItemType::Comment,
            item_id: RecordId::new(9),
            upvotes: 2,
            downvotes: 1,
            score: 1,
            your_vote: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["item_type"], "comment");
        assert_eq!(json["item_id"], 9);
        assert_eq!(json["score"], 1);
        assert!(json.get("your_vote").is_none());

        let mine = VoteCountsResponse {
            your_vote: Some(VoteType::Down),
            ..response
        };
        assert_eq!(serde_json::to_value(&mine).unwrap()["your_vote"], -1);
    }
}
