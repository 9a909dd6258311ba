//! inkpost - Main Library
//!
//! inkpost is a minimal blogging backend: users sign up and sign in with an
//! email and password, receive a signed token, and use it to create and edit
//! posts. Reads are public.
//!
//! # Module Structure
//!
//! - **`shared`** - Request schemas, validators, configuration, shared errors
//! - **`backend`** - Axum server, handlers, persistence and auth
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::create_app;
//! use inkpost::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for request parsing and validation
//! - `backend::error::BackendError` for handler failures
//! - `backend::store::StoreError` for persistence failures

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
