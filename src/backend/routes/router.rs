/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - CORS: any origin, `GET`/`POST`/`PUT`/`OPTIONS`, `Authorization` and
 *   `Content-Type` request headers
 * - HTTP tracing through `tower_http::trace`
 * - A JSON `404` fallback for unknown paths
 */

use std::time::Duration;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{IntoResponse, Json},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::FailureBody;
use crate::backend::routes::api_routes::{
    configure_protected_blog_routes, configure_public_blog_routes, configure_user_routes,
};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store handle, token keys and hashing cost
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_user_routes(Router::new());
    let router = configure_public_blog_routes(router);
    let router = router.merge(configure_protected_blog_routes(app_state.clone()));

    router
        .fallback(not_found)
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors_layer()),
        )
}

fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(86400))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(FailureBody {
            success: false,
            message: "Not found".to_string(),
        }),
    )
}
