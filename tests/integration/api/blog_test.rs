//! Post API integration tests
//!
//! Tests for create, update, bulk listing and fetch, including the auth gate
//! in front of the mutation routes.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;
use crate::{assert_failure, assert_success};
use inkpost::backend::store::BlogStore;

#[tokio::test]
async fn test_create_post() {
    let app = TestApp::new();
    let token = app.register("ada@example.com", "secret1").await;

    let response = app
        .json(
            Method::POST,
            "/api/v1/blog",
            &json!({"title": "Hello", "content": "First post"}),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let post_id = response.body["postId"].as_str().unwrap();

    let post = app.post(post_id).await;
    let author = app
        .store
        .find_user_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(post["id"], post_id);
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["content"], "First post");
    assert_eq!(post["authorId"], author.id.as_str());
}

#[tokio::test]
async fn test_create_post_with_trailing_slash() {
    let app = TestApp::new();
    let token = app.register("ada@example.com", "secret1").await;

    let response = app
        .json(
            Method::POST,
            "/api/v1/blog/",
            &json!({"title": "Slash", "content": "Body"}),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["postId"].is_string());
}

#[tokio::test]
async fn test_create_post_without_token() {
    let app = TestApp::new();

    let response = app
        .json(
            Method::POST,
            "/api/v1/blog",
            &json!({"title": "Hello", "content": "World"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_failure!(response.body, "Token not found");
    assert_eq!(app.store.post_count().await, 0);
}

#[tokio::test]
async fn test_create_post_with_forged_token() {
    let app = TestApp::new();
    app.register("ada@example.com", "secret1").await;
    let forged = inkpost::backend::auth::SessionKeys::new("some-other-secret", None)
        .create_token("anyone", None)
        .unwrap();

    let response = app
        .json(
            Method::POST,
            "/api/v1/blog",
            &json!({"title": "Hello", "content": "World"}),
            Some(&forged),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_failure!(response.body);
    assert_eq!(app.store.post_count().await, 0);
}

#[tokio::test]
async fn test_create_post_invalid_input() {
    let app = TestApp::new();
    let token = app.register("ada@example.com", "secret1").await;

    let response = app
        .json(
            Method::POST,
            "/api/v1/blog",
            &json!({"title": 42, "content": "World"}),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_failure!(response.body, "Invalid inputs, try again");
    assert_eq!(app.store.post_count().await, 0);
}

#[tokio::test]
async fn test_update_own_post() {
    let app = TestApp::new();
    let token = app.register("ada@example.com", "secret1").await;
    let post_id = app.publish(&token, "Draft", "Draft body").await;

    let response = app
        .json(
            Method::PUT,
            "/api/v1/blog",
            &json!({"id": post_id, "title": "Final", "content": "Final body"}),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"success": true, "message": "Post is updated successfully"})
    );

    let post = app.post(&post_id).await;
    assert_eq!(post["title"], "Final");
    assert_eq!(post["content"], "Final body");
}

#[tokio::test]
async fn test_update_someone_elses_post() {
    let app = TestApp::new();
    let owner = app.register("owner@example.com", "secret1").await;
    let intruder = app.register("intruder@example.com", "secret1").await;
    let post_id = app.publish(&owner, "Mine", "Hands off").await;

    let response = app
        .json(
            Method::PUT,
            "/api/v1/blog",
            &json!({"id": post_id, "title": "Stolen", "content": "Gotcha"}),
            Some(&intruder),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_failure!(response.body, "You are not the author of this post");

    let post = app.post(&post_id).await;
    assert_eq!(post["title"], "Mine");
    assert_eq!(post["content"], "Hands off");
}

#[tokio::test]
async fn test_update_missing_post() {
    let app = TestApp::new();
    let token = app.register("ada@example.com", "secret1").await;

    let response = app
        .json(
            Method::PUT,
            "/api/v1/blog",
            &json!({"id": "no-such-post", "title": "T", "content": "C"}),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_failure!(response.body, "Post not found");
}

#[tokio::test]
async fn test_update_without_token() {
    let app = TestApp::new();
    let token = app.register("ada@example.com", "secret1").await;
    let post_id = app.publish(&token, "Title", "Body").await;

    let response = app
        .json(
            Method::PUT,
            "/api/v1/blog",
            &json!({"id": post_id, "title": "Changed", "content": "Changed"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_failure!(response.body, "Token not found");
    assert_eq!(app.post(&post_id).await["title"], "Title");
}

#[tokio::test]
async fn test_bulk_lists_users_without_passwords() {
    let app = TestApp::new();
    app.signup("ada@example.com", "secret1", Some("Ada")).await;
    app.signup("bob@example.com", "secret2", None).await;

    let response = app.get("/api/v1/blog/bulk").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_success!(response.body);

    let entries = response.body["posts"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert!(entry.get("password").is_none());
        assert!(entry["id"].is_string());
        assert!(entry["email"].is_string());
    }
}

#[tokio::test]
async fn test_bulk_empty() {
    let app = TestApp::new();

    let response = app.get("/api/v1/blog/bulk").await;

    assert_eq!(response.body, json!({"success": true, "posts": []}));
}

#[tokio::test]
async fn test_get_missing_post() {
    let app = TestApp::new();

    let response = app.get("/api/v1/blog/does-not-exist").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"success": true, "post": null}));
}

#[tokio::test]
async fn test_reads_do_not_need_a_token() {
    let app = TestApp::new();
    let token = app.register("ada@example.com", "secret1").await;
    let post_id = app.publish(&token, "Public", "Anyone can read").await;

    let response = app.get(&format!("/api/v1/blog/{}", post_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_success!(response.body);
    assert_eq!(response.body["post"]["title"], "Public");
}
