//! Comment handlers

use axum::{extract::State, Json};
use forum_core::RecordId;
use forum_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List comments on a post, newest first
///
/// GET /posts/{post_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    IdPath(post_id): IdPath<RecordId>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list(post_id).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// Create comment
///
/// POST /posts/{post_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath<RecordId>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .create(auth.username(), post_id, &request.content, request.parent_id)
        .await?;
    Ok(Created(Json(comment.into())))
}

/// Delete comment (subreddit creator only)
///
/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath((post_id, comment_id)): IdPath<(RecordId, RecordId)>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service
        .delete(comment_id, post_id, auth.username())
        .await?;
    Ok(NoContent)
}
