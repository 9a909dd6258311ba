//! Shared Module
//!
//! Types that do not depend on the HTTP server: request schemas and their
//! validators, the errors they raise, and application configuration.

/// Shared error types
pub mod error;

/// Request schemas and validators
pub mod validation;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use validation::{CreatePostInput, SigninInput, SignupInput, UpdatePostInput};
