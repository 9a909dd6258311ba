/**
 * Post Model and Database Operations
 *
 * This module holds the post row and the PostgreSQL queries behind
 * `PgStore`'s post methods.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Post struct representing a post in the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID (UUID string)
    pub id: String,
    pub title: String,
    pub content: String,
    /// Owning user's ID
    pub author_id: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to insert a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: String,
    pub title: String,
    pub content: String,
}

/// Fields an author may change
#[derive(Debug, Clone)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub(crate) fn into_post(self) -> Post {
        Post {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title,
            content: self.content,
            author_id: self.author_id,
            created_at: Utc::now(),
        }
    }
}

impl Post {
    /// Whether `user_id` owns this post
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author_id == user_id
    }
}

/// Create a new post
pub async fn create_post(pool: &PgPool, post: NewPost) -> Result<Post, sqlx::Error> {
    let post = post.into_post();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, author_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, author_id, created_at
        "#,
    )
    .bind(&post.id)
    .bind(&post.title)
    .bind(&post.content)
    .bind(&post.author_id)
    .bind(post.created_at)
    .fetch_one(pool)
    .await
}

/// Get post by ID
///
/// # Returns
/// Post or None if not found
pub async fn get_post_by_id(pool: &PgPool, id: &str) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update a post owned by `author_id`
///
/// # Returns
/// The updated post, or None if no row matched both `id` and `author_id`
pub async fn update_post_for_author(
    pool: &PgPool,
    id: &str,
    author_id: &str,
    changes: PostChanges,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2
        WHERE id = $3 AND author_id = $4
        RETURNING id, title, content, author_id, created_at
        "#,
    )
    .bind(&changes.title)
    .bind(&changes.content)
    .bind(id)
    .bind(author_id)
    .fetch_optional(pool)
    .await
}
