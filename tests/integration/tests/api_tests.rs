//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DB_HOST, DB_USER, DB_PASSWORD, DB_NAME, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register and log in a fresh user; returns (request, access token)
async fn signed_in(server: &TestServer) -> (RegisterRequest, String) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (request, auth.access_token)
}

async fn create_subreddit(server: &TestServer, token: &str) -> SubredditResponse {
    let response = server
        .post_auth("/api/v1/subreddits", token, &CreateSubredditRequest::unique())
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_post(
    server: &TestServer,
    token: &str,
    subreddit_id: i64,
    title: &str,
) -> PostResponse {
    let response = server
        .post_auth(
            &format!("/api/v1/subreddits/{subreddit_id}/posts"),
            token,
            &CreatePostRequest::new(title),
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Credential Tests
// ============================================================================

#[tokio::test]
async fn test_register_login_and_me() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, token) = signed_in(&server).await;

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, request.username);
    assert_eq!(me.email, request.email);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (mut request, _) = signed_in(&server).await;
    request.email = format!("other{}@example.com", unique_suffix());
    request.password = "pw2".to_string();
    request.confirm_password = "pw2".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Original password still works
    let login = LoginRequest {
        username: request.username.clone(),
        password: "pw1".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        username: format!("nobody{}", unique_suffix()),
        password: "wrong".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Content and Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_shows_in_subreddit_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signed_in(&server).await;
    let (_, bob) = signed_in(&server).await;

    let sub = create_subreddit(&server, &alice).await;
    let post = create_post(&server, &alice, sub.id, "hi").await;

    let response = server
        .put_auth(
            &format!("/api/v1/posts/{}/vote", post.id),
            &bob,
            &VoteRequest { vote_type: 1 },
        )
        .await
        .unwrap();
    let counts: VoteCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((counts.upvotes, counts.downvotes), (1, 0));

    let response = server
        .get(&format!("/api/v1/subreddits/{}/posts", sub.id))
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "hi");
    assert_eq!((posts[0].upvotes, posts[0].downvotes), (1, 0));
}

#[tokio::test]
async fn test_vote_overwrite_and_idempotence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signed_in(&server).await;
    let sub = create_subreddit(&server, &alice).await;
    let post = create_post(&server, &alice, sub.id, "hi").await;
    let path = format!("/api/v1/posts/{}/vote", post.id);

    for _ in 0..2 {
        let response = server
            .put_auth(&path, &alice, &VoteRequest { vote_type: 1 })
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server
        .put_auth(&path, &alice, &VoteRequest { vote_type: -1 })
        .await
        .unwrap();
    let counts: VoteCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!((counts.upvotes, counts.downvotes), (0, 1));
    assert_eq!(counts.score, -1);

    let response = server
        .get_auth(&format!("/api/v1/posts/{}/votes", post.id), &alice)
        .await
        .unwrap();
    let counts: VoteCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.your_vote, Some(-1));
}

#[tokio::test]
async fn test_only_creator_deletes_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signed_in(&server).await;
    let (_, bob) = signed_in(&server).await;
    let sub = create_subreddit(&server, &alice).await;
    let post = create_post(&server, &bob, sub.id, "by bob").await;
    let path = format!("/api/v1/subreddits/{}/posts/{}", sub.id, post.id);

    let response = server.delete_auth(&path, &bob).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, &alice).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/v1/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_comments_and_moderation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signed_in(&server).await;
    let (_, bob) = signed_in(&server).await;
    let sub = create_subreddit(&server, &alice).await;
    let post = create_post(&server, &alice, sub.id, "hi").await;
    let comments_path = format!("/api/v1/posts/{}/comments", post.id);

    let response = server
        .post_auth(
            &comments_path,
            &bob,
            &CreateCommentRequest {
                content: "nice".to_string(),
                parent_id: None,
            },
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/comments/{}/vote", comment.id),
            &alice,
            &VoteRequest { vote_type: -1 },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let listed: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].downvotes, 1);

    let delete_path = format!("{comments_path}/{}", comment.id);
    let response = server.delete_auth(&delete_path, &bob).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&delete_path, &alice).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let listed: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_list_posts_filter_and_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = signed_in(&server).await;
    let sub = create_subreddit(&server, &alice).await;
    let first = create_post(&server, &alice, sub.id, "first").await;
    let second = create_post(&server, &alice, sub.id, "second").await;

    let response = server
        .get(&format!("/api/v1/posts?subreddit_id={}", sub.id))
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let response = server.get("/api/v1/posts").await.unwrap();
    let all: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|p| p.id == first.id));
}
