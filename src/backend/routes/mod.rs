//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - User and post route tables
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use inkpost::backend::auth::SessionKeys;
//! use inkpost::backend::routes::create_router;
//! use inkpost::backend::server::AppState;
//! use inkpost::backend::store::MemoryStore;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()), SessionKeys::new("secret", None), 10);
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// User and post route tables
pub mod api_routes;

pub use api_routes::API_PREFIX;
pub use router::create_router;
