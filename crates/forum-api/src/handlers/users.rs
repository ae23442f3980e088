//! User handlers

use axum::{extract::State, Json};
use forum_service::{AuthService, CurrentUserResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(&auth.identity).await?;
    Ok(Json(response))
}
