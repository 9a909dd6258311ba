//! Backend Module
//!
//! This module contains all server-side code for inkpost: an Axum HTTP
//! server exposing user signup/signin and a small post API.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, startup errors
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, JWT tokens, signup/signin handlers
//! - **`blog`** - Posts and their handlers
//! - **`store`** - Persistence trait with PostgreSQL and in-memory backends
//! - **`middleware`** - Bearer token authentication
//! - **`error`** - Backend error types and the JSON failure body
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── blog/           - Posts
//! ├── store/          - Persistence
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Responses
//!
//! Successful calls return `{"success": true, ...}` or a route-specific
//! body; failures return `{"success": false, "message": "..."}`. The auth
//! gate and signin fail with `403`, everything else fails with `200`.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Users, passwords and tokens
pub mod auth;

/// Posts
pub mod blog;

/// Persistence
pub mod store;

/// Request middleware
pub mod middleware;

/// Error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState};
