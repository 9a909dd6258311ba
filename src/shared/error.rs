//! Shared Error Types
//!
//! This module defines error types raised by the request schemas in
//! [`crate::shared::validation`]. They carry enough detail to log *why* a body
//! was rejected, while handlers decide what message the client sees.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON body could not be decoded into the schema
//! - `ValidationError` - A field was present but failed a schema rule
//!
//! # Usage
//!
//! ```rust
//! use inkpost::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must be a valid email address");
//! assert_eq!(error.field(), Some("email"));
//! ```
use thiserror::Error;

/// Errors produced while checking a request body against its schema
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
            Self::SerializationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
