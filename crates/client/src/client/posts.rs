//! Post API operations.

use posts_core::post::{CreatePostRequest, Post, UpdatePostRequest};

use super::PostsClient;
use crate::error::Result;

impl PostsClient {
    /// List all posts.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let response = self.client.get(self.url("/posts")).send().await?;
        self.handle_response(response).await
    }

    /// Create a new post.
    pub async fn create_post(&self, user_id: &str, content: &str) -> Result<Post> {
        let response = self
            .client
            .post(self.url("/posts"))
            .json(&CreatePostRequest::new(user_id, content))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace a post's content.
    pub async fn update_post(&self, id: &str, content: &str) -> Result<Post> {
        let response = self
            .client
            .put(self.url(&format!("/posts/{}", id)))
            .json(&UpdatePostRequest::new(content))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete post by ID.
    pub async fn delete_post(&self, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/posts/{}", id)))
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
