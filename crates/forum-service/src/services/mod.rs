//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of one
//! request and orchestrates repository calls and policy checks.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod post;
pub mod subreddit;
pub mod vote;

// Re-export all services for convenience
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use subreddit::SubredditService;
pub use vote::VoteService;

/// Reject blank required text fields
pub(crate) fn require_text(field: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
