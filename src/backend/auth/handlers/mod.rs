//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/v1/user/signup - User registration
//! - **`signin`** - POST /api/v1/user/signin - Credential check and token issuance
//!
//! ```rust,no_run
//! use inkpost::backend::auth::handlers::{signin, signup};
//! use inkpost::backend::server::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/v1/user/signup", post(signup))
//!     .route("/api/v1/user/signin", post(signin));
//! ```

/// Response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use types::{MessageResponse, SigninResponse};

pub use signin::signin;
pub use signup::signup;
