//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, comments, health, posts, subreddits, users, votes};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(subreddit_routes())
        .merge(post_routes())
        .merge(comment_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}

fn subreddit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/subreddits",
            get(subreddits::list_subreddits).post(subreddits::create_subreddit),
        )
        .route("/subreddits/:subreddit_id", get(subreddits::get_subreddit))
        .route(
            "/subreddits/:subreddit_id/posts",
            get(subreddits::list_subreddit_posts).post(subreddits::create_post),
        )
        .route(
            "/subreddits/:subreddit_id/posts/:post_id",
            delete(subreddits::delete_post),
        )
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts))
        .route("/posts/:post_id", get(posts::get_post))
        // Comments
        .route(
            "/posts/:post_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/posts/:post_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        // Votes
        .route("/posts/:post_id/vote", put(votes::vote_post))
        .route("/posts/:post_id/votes", get(votes::post_votes))
}

fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/:comment_id/vote", put(votes::vote_comment))
        .route("/comments/:comment_id/votes", get(votes::comment_votes))
}
