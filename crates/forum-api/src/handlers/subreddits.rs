//! Subreddit handlers
//!
//! Endpoints for subreddits and the posts inside them.

use axum::{extract::State, Json};
use forum_core::RecordId;
use forum_service::{
    CreatePostRequest, CreateSubredditRequest, PostResponse, PostService, SubredditResponse,
    SubredditService,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List subreddits, newest first
///
/// GET /subreddits
pub async fn list_subreddits(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SubredditResponse>>> {
    let service = SubredditService::new(state.service_context());
    let subreddits = service.list().await?;
    Ok(Json(subreddits.into_iter().map(Into::into).collect()))
}

/// Create subreddit owned by the current user
///
/// POST /subreddits
pub async fn create_subreddit(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSubredditRequest>,
) -> ApiResult<Created<Json<SubredditResponse>>> {
    let service = SubredditService::new(state.service_context());
    let subreddit = service
        .create(auth.username(), &request.name, &request.description)
        .await?;
    Ok(Created(Json(subreddit.into())))
}

/// Get subreddit by ID
///
/// GET /subreddits/{subreddit_id}
pub async fn get_subreddit(
    State(state): State<AppState>,
    IdPath(subreddit_id): IdPath<RecordId>,
) -> ApiResult<Json<SubredditResponse>> {
    let service = SubredditService::new(state.service_context());
    let subreddit = service.get(subreddit_id).await?;
    Ok(Json(subreddit.into()))
}

/// List the posts of a subreddit, newest first
///
/// GET /subreddits/{subreddit_id}/posts
pub async fn list_subreddit_posts(
    State(state): State<AppState>,
    IdPath(subreddit_id): IdPath<RecordId>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list(Some(subreddit_id)).await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

/// Create post
///
/// POST /subreddits/{subreddit_id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(subreddit_id): IdPath<RecordId>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service
        .create(auth.username(), subreddit_id, &request.title, &request.content)
        .await?;
    Ok(Created(Json(post.into())))
}

/// Delete post (subreddit creator only)
///
/// DELETE /subreddits/{subreddit_id}/posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((subreddit_id, post_id)): IdPath<(RecordId, RecordId)>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service
        .delete(post_id, subreddit_id, auth.username())
        .await?;
    Ok(NoContent)
}
