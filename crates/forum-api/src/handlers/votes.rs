//! Vote handlers
//!
//! `PUT` replaces the caller's vote on the item; the response carries the
//! item's counts after the write. `GET` is public; with a bearer token the
//! response also carries the caller's current vote.

use axum::{extract::State, Json};
use forum_core::{ItemRef, RecordId};
use forum_service::{VoteCountsResponse, VoteRequest, VoteService};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

async fn cast(
    state: &AppState,
    auth: &AuthUser,
    item: ItemRef,
    request: VoteRequest,
) -> ApiResult<Json<VoteCountsResponse>> {
    let service = VoteService::new(state.service_context());
    let counts = service
        .vote(auth.username(), item, request.vote_type)
        .await?;

    let mut response = VoteCountsResponse::from((item, counts));
    response.your_vote = Some(request.vote_type);
    Ok(Json(response))
}

async fn tally(
    state: &AppState,
    auth: Option<AuthUser>,
    item: ItemRef,
) -> ApiResult<Json<VoteCountsResponse>> {
    let service = VoteService::new(state.service_context());
    let counts = service.counts(item).await?;

    let mut response = VoteCountsResponse::from((item, counts));
    if let Some(auth) = auth {
        response.your_vote = service.current_vote(auth.username(), item).await?;
    }
    Ok(Json(response))
}

/// PUT /posts/{post_id}/vote
pub async fn vote_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<RecordId>,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<VoteCountsResponse>> {
    cast(&state, &auth, ItemRef::post(post_id), request).await
}

/// PUT /comments/{comment_id}/vote
pub async fn vote_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath<RecordId>,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<VoteCountsResponse>> {
    cast(&state, &auth, ItemRef::comment(comment_id), request).await
}

/// GET /posts/{post_id}/votes
pub async fn post_votes(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    IdPath(post_id): IdPath<RecordId>,
) -> ApiResult<Json<VoteCountsResponse>> {
    tally(&state, auth, ItemRef::post(post_id)).await
}

/// GET /comments/{comment_id}/votes
pub async fn comment_votes(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    IdPath(comment_id): IdPath<RecordId>,
) -> ApiResult<Json<VoteCountsResponse>> {
    tally(&state, auth, ItemRef::comment(comment_id)).await
}
