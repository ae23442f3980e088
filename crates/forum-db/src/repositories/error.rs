//! Error handling utilities for repositories
//!
//! Every `sqlx::Error` is translated here, so the layers above only see
//! `DomainError` and can tell connection, constraint and other failures apart.

use forum_core::error::DomainError;
use sqlx::error::ErrorKind as DbErrorKind;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    match &e {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => DomainError::Unavailable(e.to_string()),

        SqlxError::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or_default();
            match db_err.kind() {
                DbErrorKind::UniqueViolation => unique_violation(constraint)
                    .unwrap_or_else(|| DomainError::DatabaseError(e.to_string())),
                DbErrorKind::ForeignKeyViolation => {
                    DomainError::InvalidReference(constraint.to_string())
                }
                DbErrorKind::CheckViolation => {
                    DomainError::ValidationError(format!("check {constraint} failed"))
                }
                _ => DomainError::DatabaseError(e.to_string()),
            }
        }

        _ => DomainError::DatabaseError(e.to_string()),
    }
}

/// Domain error for a violated unique constraint, by constraint name
fn unique_violation(constraint: &str) -> Option<DomainError> {
    match constraint {
        "users_username_key" => Some(DomainError::UsernameTaken),
        "users_email_key" => Some(DomainError::EmailTaken),
        "subreddits_name_key" => Some(DomainError::SubredditNameTaken),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_errors_are_unavailable() {
        assert!(map_db_error(SqlxError::PoolTimedOut).is_connection());
        assert!(map_db_error(SqlxError::PoolClosed).is_connection());

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(map_db_error(SqlxError::Io(io)).is_connection());
    }

    #[test]
    fn test_unique_constraint_names() {
        assert!(matches!(
            unique_violation("users_username_key"),
            Some(DomainError::UsernameTaken)
        ));
        assert!(matches!(
            unique_violation("users_email_key"),
            Some(DomainError::EmailTaken)
        ));
        assert!(matches!(
            unique_violation("subreddits_name_key"),
            Some(DomainError::SubredditNameTaken)
        ));
        assert!(unique_violation("votes_pkey").is_none());
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
