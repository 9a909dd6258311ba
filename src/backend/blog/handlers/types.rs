/**
 * Post Handler Types
 *
 * Success bodies returned by the post handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::backend::blog::posts::Post;

/// Response to a successful create
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPost {
    pub post_id: String,
}

/// Response of `GET /blog/bulk`
///
/// The listing is filled from the user table; see `list_posts`.
#[derive(Serialize, Debug, Clone)]
pub struct PostListResponse {
    pub success: bool,
    pub posts: Vec<User>,
}

/// Response of `GET /blog/{id}`; `post` is `null` when nothing matched
#[derive(Serialize, Debug, Clone)]
pub struct PostResponse {
    pub success: bool,
    pub post: Option<Post>,
}
