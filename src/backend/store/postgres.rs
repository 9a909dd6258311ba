/**
 * PostgreSQL Store
 *
 * `BlogStore` over a `sqlx::PgPool`. Queries live next to their models in
 * `auth::users` and `blog::posts`; this module maps constraint violations
 * and zero-row updates onto `StoreError`.
 */

use async_trait::async_trait;
use sqlx::PgPool;

use super::{BlogStore, StoreError};
use crate::backend::auth::users::{self, NewUser, User};
use crate::backend::blog::posts::{self, NewPost, Post, PostChanges};

/// [`BlogStore`] over a PostgreSQL connection pool
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Translate constraint violations into store-level errors.
fn classify(err: sqlx::Error, field: &'static str) -> StoreError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return StoreError::UniqueViolation(field);
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::ForeignKeyViolation(field);
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl BlogStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        users::create_user(&self.pool, user)
            .await
            .map_err(|e| classify(e, "email"))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(users::get_user_by_email(&self.pool, email).await?)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(users::list_users(&self.pool).await?)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        posts::create_post(&self.pool, post)
            .await
            .map_err(|e| classify(e, "authorId"))
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        Ok(posts::get_post_by_id(&self.pool, id).await?)
    }

    async fn update_post(
        &self,
        id: &str,
        author_id: &str,
        changes: PostChanges,
    ) -> Result<Post, StoreError> {
        posts::update_post_for_author(&self.pool, id, author_id, changes)
            .await?
            .ok_or(StoreError::RecordNotFound)
    }
}
