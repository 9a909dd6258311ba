//! Blog Module
//!
//! Posts and the HTTP handlers that create, update, list and fetch them.
//!
//! ```text
//! blog/
//! ├── mod.rs          - Module exports
//! ├── posts.rs        - Post model and database operations
//! └── handlers/       - HTTP handlers
//! ```

/// Post data model and database operations
pub mod posts;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use handlers::{create_post, get_post, list_posts, update_post};
pub use posts::{NewPost, Post, PostChanges};
