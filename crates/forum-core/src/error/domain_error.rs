//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Coarse classification of a domain failure
///
/// Callers that only report success or failure still log the kind, so a
/// duplicate username can be told apart from an unreachable database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The store could not be reached (pool timeout, I/O, TLS)
    Connection,
    /// A uniqueness or foreign-key constraint rejected the write
    Constraint,
    /// The actor is not allowed to perform the operation
    Authorization,
    NotFound,
    Validation,
    Internal,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Subreddit not found: {0}")]
    SubredditNotFound(RecordId),

    #[error("Post not found: {0}")]
    PostNotFound(RecordId),

    #[error("Comment not found: {0}")]
    CommentNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid vote type: {0} (expected 1 or -1)")]
    InvalidVoteType(i16),

    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the subreddit creator can moderate its content")]
    NotSubredditCreator,

    // =========================================================================
    // Constraint Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("Subreddit name already taken")]
    SubredditNameTaken,

    #[error("Referenced record does not exist: {0}")]
    InvalidReference(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::SubredditNotFound(_) => "UNKNOWN_SUBREDDIT",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidVoteType(_) => "INVALID_VOTE_TYPE",
            Self::InvalidItemType(_) => "INVALID_ITEM_TYPE",

            // Authorization
            Self::NotSubredditCreator => "NOT_SUBREDDIT_CREATOR",

            // Constraint
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::SubredditNameTaken => "SUBREDDIT_NAME_TAKEN",
            Self::InvalidReference(_) => "INVALID_REFERENCE",

            // Infrastructure
            Self::Unavailable(_) => "DATABASE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::SubredditNotFound(_)
            | Self::PostNotFound(_)
            | Self::CommentNotFound(_) => ErrorKind::NotFound,

            Self::ValidationError(_) | Self::InvalidVoteType(_) | Self::InvalidItemType(_) => {
                ErrorKind::Validation
            }

            Self::NotSubredditCreator => ErrorKind::Authorization,

            Self::UsernameTaken
            | Self::EmailTaken
            | Self::SubredditNameTaken
            | Self::InvalidReference(_) => ErrorKind::Constraint,

            Self::Unavailable(_) => ErrorKind::Connection,

            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::Authorization
    }

    /// Check if this is a uniqueness conflict
    ///
    /// Broken references are constraint failures too, but they are reported
    /// as bad input rather than as conflicts.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken | Self::EmailTaken | Self::SubredditNameTaken
        )
    }

    /// Check if the store could not be reached
    pub fn is_connection(&self) -> bool {
        self.kind() == ErrorKind::Connection
    }
}
