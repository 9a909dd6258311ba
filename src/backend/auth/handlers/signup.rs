/**
 * Signup Handler
 *
 * This module implements the user registration handler for
 * `POST /api/v1/user/signup`.
 *
 * # Registration Process
 *
 * 1. Validate the body against the signup schema
 * 2. Look up an existing user with the same email
 * 3. Hash the password using bcrypt
 * 4. Create the user
 *
 * Failures answer `200 OK` with `{success: false, message}`.
 */

use axum::{body::Bytes, extract::State, response::Json};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::users::NewUser;
use crate::backend::error::{BackendError, ErrorResponse};
use crate::backend::server::state::AppState;
use crate::shared::validation::{parse_json, validate_signup};

/// Sign up handler
///
/// # Example Request
///
/// ```http
/// POST /api/v1/user/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "a@x.com", "password": "secret1", "name": "A"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"success": true, "message": "Signup successful"}
/// ```
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    register(&state, &body).await.map(Json).map_err(|e| {
        e.log("signup");
        ErrorResponse::from(e)
    })
}

async fn register(state: &AppState, body: &[u8]) -> Result<MessageResponse, BackendError> {
    let input = parse_json(body)
        .and_then(|value| validate_signup(&value))
        .map_err(|e| {
            tracing::debug!("Signup body rejected: {}", e);
            BackendError::validation("Invalid input, try again")
        })?;

    tracing::debug!("Signup request received");

    // Only a record that actually holds a credential blocks the email.
    if let Some(existing) = state.store.find_user_by_email(&input.email).await? {
        if !existing.password.is_empty() {
            return Err(BackendError::conflict("Email already exists"));
        }
    }

    let password = hash_password(input.password, state.bcrypt_cost).await?;

    let user = state
        .store
        .create_user(NewUser {
            email: input.email,
            name: input.name,
            password,
        })
        .await?;

    tracing::info!(user_id = %user.id, "user created");

    Ok(MessageResponse::ok("Signup successful"))
}
