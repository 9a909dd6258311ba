/**
 * Backend Error Types
 *
 * Every handler failure is one of these kinds. The `Display` text of each
 * variant is exactly the `message` the client receives, so variants carry
 * client-facing wording and nothing else.
 *
 * # Error Kinds
 *
 * - `Validation` - Request body did not match its schema
 * - `Conflict` - Signup with an email that is already registered
 * - `NotFound` - Unknown user or post
 * - `Auth` - Missing or invalid token, wrong password, not the author
 * - `Store` - Any persistence failure, including zero-row updates
 * - `Internal` - Failures outside the store, such as password hashing
 */

use thiserror::Error;

use crate::backend::store::StoreError;

/// Backend-specific error types
///
/// ```rust
/// use inkpost::backend::error::BackendError;
///
/// let err = BackendError::auth("Token not found");
/// assert_eq!(err.to_string(), "Token not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Schema mismatch on input
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Duplicate account
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unknown user or post
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Authentication or authorization failure
    #[error("{message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Server-side failure unrelated to the request or the store
    #[error("{message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the error message shown to clients
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Emit a log line for this error
    ///
    /// Client mistakes are logged at `warn`, server-side failures at `error`.
    pub fn log(&self, operation: &str) {
        match self {
            Self::Store(err) => tracing::error!(operation, error = ?err, "store error"),
            Self::Internal { message } => tracing::error!(operation, error = %message, "internal error"),
            other => tracing::warn!(operation, error = %other, "request rejected"),
        }
    }
}
