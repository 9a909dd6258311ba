//! Post Handlers Module
//!
//! # Handlers
//!
//! - **`create_post`** - POST /api/v1/blog - Create a post (authenticated)
//! - **`update_post`** - PUT /api/v1/blog - Update own post (authenticated)
//! - **`list_posts`** - GET /api/v1/blog/bulk - Bulk listing
//! - **`get_post`** - GET /api/v1/blog/{id} - Fetch one post

/// Response types
pub mod types;

pub mod create;
pub mod update;
pub mod list;
pub mod get;

pub use types::{CreatedPost, PostListResponse, PostResponse};

pub use create::create_post;
pub use get::get_post;
pub use list::list_posts;
pub use update::update_post;
