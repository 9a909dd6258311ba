/**
 * Create Post Handler
 *
 * `POST /api/v1/blog` (authenticated). The new post's author is the caller
 * resolved by the auth middleware.
 */

use axum::{body::Bytes, extract::State, response::Json};

use crate::backend::blog::handlers::types::CreatedPost;
use crate::backend::blog::posts::NewPost;
use crate::backend::error::{BackendError, ErrorResponse};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::BlogStore;
use crate::shared::validation::{parse_json, validate_create_post};

pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    body: Bytes,
) -> Result<Json<CreatedPost>, ErrorResponse> {
    publish(state.store.as_ref(), &user.user_id, &body)
        .await
        .map(Json)
        .map_err(|e| {
            e.log("create_post");
            ErrorResponse::from(e)
        })
}

/// Validate `body` and store it as a post written by `author_id`
pub async fn publish(
    store: &dyn BlogStore,
    author_id: &str,
    body: &[u8],
) -> Result<CreatedPost, BackendError> {
    let input = parse_json(body)
        .and_then(|value| validate_create_post(&value))
        .map_err(|e| {
            tracing::debug!("Create post body rejected: {}", e);
            BackendError::validation("Invalid inputs, try again")
        })?;

    let post = store
        .create_post(NewPost {
            author_id: author_id.to_string(),
            title: input.title,
            content: input.content,
        })
        .await?;

    tracing::info!(post_id = %post.id, author_id, "post created");

    Ok(CreatedPost { post_id: post.id })
}
