//! Middleware Module
//!
//! HTTP middleware applied before handlers run.
//!
//! - **`auth`** - Bearer-token gate for post mutation routes

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
