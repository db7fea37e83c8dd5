use async_trait::async_trait;

use crate::post::Post;

use super::Result;

/// Repository for post records, keyed by `id`.
///
/// Implementations must be safe to share across concurrent requests. None of
/// the operations check whether a record already exists.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns every post in the store, in no particular order.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Writes a post, replacing any record with the same id.
    async fn put_post(&self, post: &Post) -> Result<()>;

    /// Sets `content` on the record keyed by `id` and returns the record as
    /// stored afterwards.
    ///
    /// If no record exists, one is created holding only `id` and `content`.
    async fn update_post_content(&self, id: &str, content: &str) -> Result<Post>;

    /// Deletes the record keyed by `id`. Deleting a missing record succeeds.
    async fn delete_post(&self, id: &str) -> Result<()>;
}
