/**
 * Bulk Listing Handler
 *
 * `GET /api/v1/blog/bulk`. The listing is read from the user table and
 * returned under `posts`, matching the deployed API that existing clients
 * consume. Password hashes are never serialized.
 */

use axum::{extract::State, response::Json};

use crate::backend::blog::handlers::types::PostListResponse;
use crate::backend::error::{BackendError, ErrorResponse};
use crate::backend::server::state::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<PostListResponse>, ErrorResponse> {
    let users = state.store.list_users().await.map_err(|e| {
        let e = BackendError::from(e);
        e.log("list_posts");
        ErrorResponse::from(e)
    })?;

    tracing::debug!(count = users.len(), "bulk listing served");

    Ok(Json(PostListResponse {
        success: true,
        posts: users,
    }))
}
