//! Backend Error Module
//!
//! This module defines the error kinds raised by HTTP handlers and how they
//! are rendered on the wire.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - JSON failure body and IntoResponse implementations
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::{ErrorResponse, FailureBody};
pub use types::BackendError;
