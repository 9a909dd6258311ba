/**
 * Authentication Middleware
 *
 * Guards the post mutation routes. It reads the `Authorization` header,
 * verifies the token, and hands the resolved user id to the handler through
 * the `AuthUser` extractor. Any failure answers `403` with the uniform
 * failure body and the handler never runs.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::{BackendError, ErrorResponse};

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Resolve the caller from request headers
///
/// 1. Missing or empty `Authorization` header fails with "Token not found"
/// 2. The second whitespace-separated segment is taken as the token; the
///    scheme word itself is not checked
/// 3. The token's signature and, when present, expiry are verified
/// 4. A payload without a usable `id` fails with "User not found"
pub fn authenticate(headers: &HeaderMap, keys: &SessionKeys) -> Result<AuthenticatedUser, BackendError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();
    if header.trim().is_empty() {
        return Err(BackendError::auth("Token not found"));
    }

    let token = header.split_whitespace().nth(1).unwrap_or_default();

    let claims = keys
        .verify_token(token)
        .map_err(|e| BackendError::auth(e.to_string()))?;

    let user_id = claims
        .subject()
        .ok_or_else(|| BackendError::auth("User not found"))?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// On success the `AuthenticatedUser` is attached to request extensions.
pub async fn auth_middleware(
    State(keys): State<Arc<SessionKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ErrorResponse> {
    let user = authenticate(request.headers(), &keys).map_err(|e| {
        e.log("authenticate");
        ErrorResponse::forbidden(e)
    })?;

    tracing::debug!(user_id = %user.user_id, "request authenticated");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only meaningful on routes behind [`auth_middleware`]; elsewhere it
/// rejects like a missing token.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ErrorResponse::forbidden(BackendError::auth("Token not found"))
            })?;

        Ok(AuthUser(user))
    }
}
