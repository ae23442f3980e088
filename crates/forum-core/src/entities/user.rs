//! User entity - a registered forum account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::RecordId;

/// Registered user
///
/// The password hash is deliberately not part of the entity; it is only
/// reachable through [`StoredCredentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: RecordId, username: String, email: String) -> Self {
        Self {
            id,
            username,
            email,
            created_at: Utc::now(),
        }
    }

    /// Identity carried by an authenticated request
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.username.clone())
    }
}

/// Fields supplied at registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// What a successful credential check yields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub id: RecordId,
    pub username: String,
}

impl Identity {
    pub fn new(id: RecordId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

/// Stored login material for one user
#[derive(Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub id: RecordId,
    pub username: String,
    pub password_hash: String,
}

impl StoredCredentials {
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.username.clone())
    }
}

// Keep hashes out of logs
impl std::fmt::Debug for StoredCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredCredentials")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_identity() {
        let user = User::new(
            RecordId::new(3),
            "alice".to_string(),
            "alice@example.com".to_string(),
        );
        assert_eq!(user.identity(), Identity::new(RecordId::new(3), "alice"));
    }

    #[test]
    fn test_credentials_debug_hides_hash() {
        let creds = StoredCredentials {
            id: RecordId::new(1),
            username: "alice".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }
}
