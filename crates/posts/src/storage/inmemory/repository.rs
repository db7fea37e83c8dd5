//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use posts_core::post::Post;
use posts_core::storage::{PostRepository, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    posts: Arc<RwLock<HashMap<String, Post>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[async_trait]
impl PostRepository for InMemoryRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }

    async fn put_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id.clone(), post.clone());
        Ok(())
    }

    async fn update_post_content(&self, id: &str, content: &str) -> Result<Post> {
        let mut posts = self.posts.write().await;
        let post = posts.entry(id.to_string()).or_insert_with(|| Post {
            id: id.to_string(),
            user_id: String::new(),
            content: String::new(),
        });
        post.content = content.to_string();
        Ok(post.clone())
    }

    async fn delete_post(&self, id: &str) -> Result<()> {
        let mut posts = self.posts.write().await;
        posts.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_list() {
        let repo = InMemoryRepository::new();
        let post = Post::new("u1", "hello");

        repo.put_post(&post).await.unwrap();

        let posts = repo.list_posts().await.unwrap();
        assert_eq!(posts, vec![post]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_overwrites_same_id() {
        let repo = InMemoryRepository::new();
        repo.put_post(&Post::new("u1", "first").with_id("same"))
            .await
            .unwrap();
        repo.put_post(&Post::new("u2", "second").with_id("same"))
            .await
            .unwrap();

        let posts = repo.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, "u2");
        assert_eq!(posts[0].content, "second");
    }

    #[tokio::test]
    async fn test_update_changes_only_content() {
        let repo = InMemoryRepository::new();
        let post = Post::new("u1", "hello");
        repo.put_post(&post).await.unwrap();

        let updated = repo.update_post_content(&post.id, "world").await.unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.content, "world");
        assert_eq!(repo.list_posts().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_creates_fragment() {
        let repo = InMemoryRepository::new();

        let updated = repo.update_post_content("ghost", "boo").await.unwrap();

        assert_eq!(updated.id, "ghost");
        assert_eq!(updated.user_id, "");
        assert_eq!(updated.content, "boo");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::new();
        let post = Post::new("u1", "hello");
        repo.put_post(&post).await.unwrap();

        repo.delete_post(&post.id).await.unwrap();
        repo.delete_post(&post.id).await.unwrap();
        repo.delete_post("never-existed").await.unwrap();

        assert!(repo.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_puts() {
        let repo = InMemoryRepository::new();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.put_post(&Post::new("u1", format!("post {i}")))
                        .await
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.len().await, 20);
    }
}
