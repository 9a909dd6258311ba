/**
 * Update Post Handler
 *
 * `PUT /api/v1/blog` (authenticated). The update runs as three steps:
 *
 * 1. **Lookup** - the post named by `id` must exist
 * 2. **Authorize** - the caller must be its author
 * 3. **Mutate** - title and content are written with a store call that is
 *    itself filtered on both id and author
 *
 * Failures answer `200 OK` with `{success: false, message}`.
 */

use axum::{body::Bytes, extract::State, response::Json};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::blog::posts::{Post, PostChanges};
use crate::backend::error::{BackendError, ErrorResponse};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::store::BlogStore;
use crate::shared::validation::{parse_json, validate_update_post};

pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    body: Bytes,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    revise(state.store.as_ref(), &user.user_id, &body)
        .await
        .map(Json)
        .map_err(|e| {
            e.log("update_post");
            ErrorResponse::from(e)
        })
}

/// Apply an update from `author_id` to the post named in `body`
pub async fn revise(
    store: &dyn BlogStore,
    author_id: &str,
    body: &[u8],
) -> Result<MessageResponse, BackendError> {
    let input = parse_json(body)
        .and_then(|value| validate_update_post(&value))
        .map_err(|e| {
            tracing::debug!("Update post body rejected: {}", e);
            BackendError::validation("Invalid inputs, try again")
        })?;

    let post = store
        .find_post(&input.id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post not found"))?;

    authorize(&post, author_id)?;

    store
        .update_post(
            &post.id,
            author_id,
            PostChanges {
                title: input.title,
                content: input.content,
            },
        )
        .await?;

    tracing::info!(post_id = %post.id, author_id, "post updated");

    Ok(MessageResponse::ok("Post is updated successfully"))
}

/// Only the author may change a post
pub fn authorize(post: &Post, user_id: &str) -> Result<(), BackendError> {
    if post.is_authored_by(user_id) {
        Ok(())
    } else {
        Err(BackendError::auth("You are not the author of this post"))
    }
}
