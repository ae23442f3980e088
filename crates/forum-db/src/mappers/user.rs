//! User model -> entity mappers

use forum_core::entities::{StoredCredentials, User};
use forum_core::value_objects::RecordId;

use crate::models::{CredentialsModel, UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: RecordId::new(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

impl From<CredentialsModel> for StoredCredentials {
    fn from(model: CredentialsModel) -> Self {
        StoredCredentials {
            id: RecordId::new(model.id),
            username: model.username,
            password_hash: model.password_hash,
        }
    }
}
