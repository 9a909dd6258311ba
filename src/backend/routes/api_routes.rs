/**
 * API Route Handlers
 *
 * This module defines the route tables for the API:
 * - User endpoints (signup, signin)
 * - Post endpoints, split into the authenticated mutation routes and the
 *   public read routes
 *
 * # Routes
 *
 * ## Users
 * - `POST /api/v1/user/signup` - User registration
 * - `POST /api/v1/user/signin` - Credential check, returns a token
 *
 * ## Posts (authenticated)
 * - `POST /api/v1/blog` - Create a post
 * - `PUT /api/v1/blog` - Update own post
 *
 * ## Posts (public)
 * - `GET /api/v1/blog/bulk` - Bulk listing
 * - `GET /api/v1/blog/{id}` - Fetch one post
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{signin, signup};
use crate::backend::blog::{create_post, get_post, list_posts, update_post};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Common prefix of every API route
pub const API_PREFIX: &str = "/api/v1";

/// Configure user routes
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(&format!("{API_PREFIX}/user/signup"), post(signup))
        .route(&format!("{API_PREFIX}/user/signin"), post(signin))
}

/// Configure the post mutation routes
///
/// Every route here runs behind [`auth_middleware`]; a request without a
/// valid token is answered `403` before the handler is reached. Both the
/// bare and trailing-slash forms of the collection path are served.
pub fn configure_protected_blog_routes(state: AppState) -> Router<AppState> {
    let base = format!("{API_PREFIX}/blog");

    Router::new()
        .route(&base, post(create_post).put(update_post))
        .route(&format!("{base}/"), post(create_post).put(update_post))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Configure the public post routes
pub fn configure_public_blog_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(&format!("{API_PREFIX}/blog/bulk"), get(list_posts))
        .route(&format!("{API_PREFIX}/blog/{{id}}"), get(get_post))
}
