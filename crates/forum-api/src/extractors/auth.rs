//! Authentication extractor
//!
//! Resolves the bearer token of the Authorization header to the identity
//! of the current user. The identity lives only as long as the request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use forum_core::{Identity, RecordId};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: Identity,
}

impl AuthUser {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn id(&self) -> RecordId {
        self.identity.id
    }

    pub fn username(&self) -> &str {
        &self.identity.username
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::from(e)
            })?;

        let identity = claims.identity().map_err(|e| {
            tracing::warn!(error = %e, "Invalid subject in token");
            ApiError::from(e)
        })?;

        Ok(AuthUser::new(identity))
    }
}
