/**
 * In-Memory Store
 *
 * `BlogStore` over two vectors behind a `tokio::sync::RwLock`. It enforces
 * the same constraints as the PostgreSQL schema: unique user emails, posts
 * referencing an existing author, and updates filtered on id and author.
 */

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BlogStore, StoreError};
use crate::backend::auth::users::{NewUser, User};
use crate::backend::blog::posts::{NewPost, Post, PostChanges};

/// [`BlogStore`] that keeps rows in process memory
///
/// Rows are kept in insertion order, which is also the order `list_users`
/// returns them in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    posts: Vec<Post>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts
    pub async fn post_count(&self) -> usize {
        self.tables.read().await.posts.len()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::UniqueViolation("email"));
        }

        let user = user.into_user();
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.users.iter().any(|u| u.id == post.author_id) {
            return Err(StoreError::ForeignKeyViolation("authorId"));
        }

        let post = post.into_post();
        tables.posts.push(post.clone());
        Ok(post)
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update_post(
        &self,
        id: &str,
        author_id: &str,
        changes: PostChanges,
    ) -> Result<Post, StoreError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == id && p.author_id == author_id)
            .ok_or(StoreError::RecordNotFound)?;

        post.title = changes.title;
        post.content = changes.content;
        Ok(post.clone())
    }
}
