//! Persistence Module
//!
//! Handlers never talk to a database directly. They go through [`BlogStore`],
//! a small async trait covering exactly the reads and writes the API needs.
//!
//! # Implementations
//!
//! - **`postgres`** - [`PgStore`], backed by a `sqlx::PgPool`
//! - **`memory`** - [`MemoryStore`], an in-process store for tests and local runs
//!
//! Both enforce the same constraints: unique user emails, posts referencing an
//! existing author, and updates filtered on both post id and author id.

use async_trait::async_trait;
use thiserror::Error;

use crate::backend::auth::users::{NewUser, User};
use crate::backend::blog::posts::{NewPost, Post, PostChanges};

/// PostgreSQL-backed store
pub mod postgres;

/// In-process store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a [`BlogStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// An update matched zero rows
    #[error("Record to update not found.")]
    RecordNotFound,

    /// Insert collided with a unique column
    #[error("Unique constraint failed on the field: `{0}`")]
    UniqueViolation(&'static str),

    /// Insert referenced a row that does not exist
    #[error("Foreign key constraint failed on the field: `{0}`")]
    ForeignKeyViolation(&'static str),
}

/// Storage operations used by the user and post handlers
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Insert a user; the email must not already be taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Insert a post; `author_id` must reference an existing user.
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError>;

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Update title and content of the post matching both `id` and
    /// `author_id`. Zero matching rows is [`StoreError::RecordNotFound`].
    async fn update_post(
        &self,
        id: &str,
        author_id: &str,
        changes: PostChanges,
    ) -> Result<Post, StoreError>;
}
