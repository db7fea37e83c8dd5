use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single post record, keyed by `id` in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    /// Opaque author reference.
    ///
    /// Empty only for records that were created by an update against a key
    /// that did not exist yet; such records are serialized without the field.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    pub content: String,
}

impl Post {
    /// Creates a new post with a freshly generated id.
    pub fn new(user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            content: content.into(),
        }
    }

    /// Sets a specific ID for this post (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Post::new("u1", "hello");
        let b = Post::new("u1", "hello");

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_serializes_all_fields() {
        let post = Post::new("u1", "hello").with_id("abc");
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "abc", "user_id": "u1", "content": "hello"})
        );
    }

    #[test]
    fn test_fragment_without_user_id() {
        let post: Post = serde_json::from_str(r#"{"id":"abc","content":"world"}"#).unwrap();
        assert_eq!(post.user_id, "");

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json, serde_json::json!({"id": "abc", "content": "world"}));
    }
}
