//! Authentication API integration tests
//!
//! Tests for the signup and signin endpoints.

use std::time::Duration;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;
use crate::{assert_failure, assert_success};
use inkpost::backend::auth::SessionKeys;
use inkpost::backend::store::BlogStore;

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new();

    let response = app.signup("ada@example.com", "secret1", Some("Ada")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"success": true, "message": "Signup successful"})
    );

    let user = app
        .store
        .find_user_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_ne!(user.password, "secret1");
}

#[tokio::test]
async fn test_signup_without_name() {
    let app = TestApp::new();

    let response = app.signup("noname@example.com", "secret1", None).await;
    assert_success!(response.body);

    let user = app
        .store
        .find_user_by_email("noname@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.name, None);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new();
    assert_success!(app.signup("dup@example.com", "secret1", None).await.body);

    let response = app.signup("dup@example.com", "another1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_failure!(response.body, "Email already exists");
    assert_eq!(app.store.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_signup_invalid_input() {
    let app = TestApp::new();

    for body in [
        json!({"email": "not-an-email", "password": "secret1"}),
        json!({"email": "a@example.com", "password": ""}),
        json!({"email": "a@example.com"}),
        json!(["a@example.com", "secret1"]),
    ] {
        let response = app
            .json(Method::POST, "/api/v1/user/signup", &body, None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_failure!(response.body, "Invalid input, try again");
    }

    assert!(app.store.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_signin_success() {
    let app = TestApp::new();
    app.signup("ada@example.com", "secret1", Some("Ada")).await;

    let response = app.signin("ada@example.com", "secret1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_success!(response.body);
    assert_eq!(response.body["message"], "Signin success");

    let token = response.body["token"].as_str().unwrap();
    let claims = app.keys.verify_token(token).unwrap();
    let user = app
        .store
        .find_user_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(claims.subject(), Some(user.id));
    assert_eq!(claims.name.as_deref(), Some("Ada"));
    assert_eq!(claims.exp, None);
}

#[tokio::test]
async fn test_signin_token_expires_when_ttl_configured() {
    let app = TestApp::with_keys(SessionKeys::new(
        "ttl-secret",
        Some(Duration::from_secs(3600)),
    ));
    app.signup("ttl@example.com", "secret1", None).await;

    let response = app.signin("ttl@example.com", "secret1").await;
    let token = response.body["token"].as_str().unwrap();

    let claims = app.keys.verify_token(token).unwrap();
    assert!(claims.exp.is_some());
}

#[tokio::test]
async fn test_signin_unknown_email() {
    let app = TestApp::new();

    let response = app.signin("ghost@example.com", "secret1").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_failure!(response.body, "User not found, please check your email.");
}

#[tokio::test]
async fn test_signin_wrong_password() {
    let app = TestApp::new();
    app.signup("ada@example.com", "secret1", None).await;

    let response = app.signin("ada@example.com", "wrong-password").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_failure!(response.body, "Wrong password, try again");
    assert!(response.body.get("token").is_none());
}

#[tokio::test]
async fn test_signin_invalid_input() {
    let app = TestApp::new();

    let response = app
        .json(
            Method::POST,
            "/api/v1/user/signin",
            &json!({"email": "ada@example.com"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_failure!(response.body, "Invalid input, try again");
}
