/**
 * Get Post Handler
 *
 * `GET /api/v1/blog/{id}`. An unknown id is not an error: the response is
 * `{success: true, post: null}`.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::blog::handlers::types::PostResponse;
use crate::backend::error::{BackendError, ErrorResponse};
use crate::backend::server::state::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ErrorResponse> {
    let post = state.store.find_post(&id).await.map_err(|e| {
        let e = BackendError::from(e);
        e.log("get_post");
        ErrorResponse::from(e)
    })?;

    if post.is_none() {
        tracing::debug!(post_id = %id, "post not found");
    }

    Ok(Json(PostResponse {
        success: true,
        post,
    }))
}
