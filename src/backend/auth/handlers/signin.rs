/**
 * Signin Handler
 *
 * This module implements the user authentication handler for
 * `POST /api/v1/user/signin`.
 *
 * # Authentication Process
 *
 * 1. Validate the body against the signin schema
 * 2. Look up user by email
 * 3. Verify password using bcrypt
 * 4. Sign a token carrying `{id, name}`
 *
 * Every failure answers `403 Forbidden` with `{success: false, message}`.
 */

use axum::{body::Bytes, extract::State, response::Json};

use crate::backend::auth::handlers::types::SigninResponse;
use crate::backend::auth::passwords::verify_password;
use crate::backend::error::{BackendError, ErrorResponse};
use crate::backend::server::state::AppState;
use crate::shared::validation::{parse_json, validate_signin};

/// Signin handler
///
/// # Example Response
///
/// ```json
/// {"success": true, "message": "Signin success", "token": "eyJhbGciOiJIUzI1NiJ9..."}
/// ```
pub async fn signin(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SigninResponse>, ErrorResponse> {
    authenticate_credentials(&state, &body)
        .await
        .map(Json)
        .map_err(|e| {
            e.log("signin");
            ErrorResponse::forbidden(e)
        })
}

async fn authenticate_credentials(
    state: &AppState,
    body: &[u8],
) -> Result<SigninResponse, BackendError> {
    let input = parse_json(body)
        .and_then(|value| validate_signin(&value))
        .map_err(|e| {
            tracing::debug!("Signin body rejected: {}", e);
            BackendError::validation("Invalid input, try again")
        })?;

    let user = state
        .store
        .find_user_by_email(&input.email)
        .await?
        .ok_or_else(|| BackendError::not_found("User not found, please check your email."))?;

    if !verify_password(input.password, user.password.clone()).await {
        return Err(BackendError::auth("Wrong password, try again"));
    }

    let token = state
        .sessions
        .create_token(&user.id, user.name.as_deref())
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal("Server error")
        })?;

    tracing::info!("User signed in successfully: {}", user.id);

    Ok(SigninResponse {
        success: true,
        message: "Signin success".to_string(),
        token,
    })
}
