/**
 * Authentication Handler Types
 *
 * Success bodies returned by the signup and signin handlers. Request bodies
 * are defined with their validators in `crate::shared::validation`.
 */

use serde::{Deserialize, Serialize};

/// `{success, message}` body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// A successful response carrying `message`
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Signin response
///
/// Carries the signed token the client presents on post mutations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SigninResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}
