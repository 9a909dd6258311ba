//! In-process application helpers
//!
//! Builds the full router (routes, auth gate, layers) over a fresh
//! `MemoryStore` and drives it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use inkpost::backend::auth::SessionKeys;
use inkpost::backend::routes::create_router;
use inkpost::backend::server::AppState;
use inkpost::backend::store::MemoryStore;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Lowest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

/// Status and decoded JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub keys: SessionKeys,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_keys(SessionKeys::new(TEST_SECRET, None))
    }

    pub fn with_keys(keys: SessionKeys) -> Self {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone(), keys.clone(), TEST_BCRYPT_COST);

        Self {
            router: create_router(state),
            store,
            keys,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        TestResponse { status, body }
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        body: &Value,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn signup(&self, email: &str, password: &str, name: Option<&str>) -> TestResponse {
        let mut body = json!({"email": email, "password": password});
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        self.json(Method::POST, "/api/v1/user/signup", &body, None)
            .await
    }

    pub async fn signin(&self, email: &str, password: &str) -> TestResponse {
        self.json(
            Method::POST,
            "/api/v1/user/signin",
            &json!({"email": email, "password": password}),
            None,
        )
        .await
    }

    /// Sign up and sign in, returning the issued token
    pub async fn register(&self, email: &str, password: &str) -> String {
        let signup = self.signup(email, password, None).await;
        assert_eq!(signup.body["success"], true, "signup failed: {}", signup.body);

        let signin = self.signin(email, password).await;
        signin.body["token"]
            .as_str()
            .unwrap_or_else(|| panic!("signin failed: {}", signin.body))
            .to_string()
    }

    /// Create a post as the holder of `token`, returning its id
    pub async fn publish(&self, token: &str, title: &str, content: &str) -> String {
        let response = self
            .json(
                Method::POST,
                "/api/v1/blog",
                &json!({"title": title, "content": content}),
                Some(token),
            )
            .await;

        response.body["postId"]
            .as_str()
            .unwrap_or_else(|| panic!("create failed: {}", response.body))
            .to_string()
    }

    pub async fn post(&self, id: &str) -> Value {
        self.get(&format!("/api/v1/blog/{}", id)).await.body["post"].clone()
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
