//! Moderation policy - who may delete content inside a subreddit

use crate::error::DomainError;

/// Outcome of a policy check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    #[inline]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `requester` may moderate a subreddit created by `creator`
///
/// Only the creator may delete posts or comments. Usernames compare exactly.
pub fn authorize_moderation(creator: &str, requester: &str) -> Decision {
    if !requester.is_empty() && creator == requester {
        Decision::Allow
    } else {
        Decision::Deny
    }
}

/// Same check as [`authorize_moderation`], as a `Result` for `?` chains
pub fn ensure_moderator(creator: &str, requester: &str) -> Result<(), DomainError> {
    match authorize_moderation(creator, requester) {
        Decision::Allow => Ok(()),
        Decision::Deny => Err(DomainError::NotSubredditCreator),
    }
}
