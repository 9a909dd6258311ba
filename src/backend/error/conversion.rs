/**
 * Error Conversion
 *
 * Failures leave the server as a uniform JSON body:
 *
 * ```json
 * { "success": false, "message": "Token not found" }
 * ```
 *
 * The status code is chosen by the route, not by the error kind. The auth
 * gate and signin answer `403 Forbidden`; every other route keeps `200 OK`
 * and callers inspect `success`.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::backend::error::types::BackendError;

/// JSON body of every failed request
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
}

/// A failure ready to be sent, paired with its HTTP status
#[derive(Debug)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub message: String,
}

impl ErrorResponse {
    /// Override the status code
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Shorthand for a `403 Forbidden` failure
    pub fn forbidden(error: BackendError) -> Self {
        Self::from(error).with_status(StatusCode::FORBIDDEN)
    }
}

impl From<BackendError> for ErrorResponse {
    fn from(error: BackendError) -> Self {
        Self {
            status: StatusCode::OK,
            message: error.message(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = FailureBody {
            success: false,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}
