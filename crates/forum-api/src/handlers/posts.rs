//! Post handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use forum_core::RecordId;
use forum_service::{ListPostsQuery, PostResponse, PostService};

use crate::extractors::IdPath;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List posts across subreddits, optionally filtered
///
/// GET /posts?subreddit_id=
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListPostsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let service = PostService::new(state.service_context());
    let posts = service.list(query.subreddit_id).await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// Get post by ID
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<RecordId>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get(post_id).await?;
    Ok(Json(post.into()))
}
