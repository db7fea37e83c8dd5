//! API request types for post operations.
//!
//! These types are shared between the server and client for type-safe API communication.
//! Fields are optional on the wire so that a missing field and an empty one are
//! rejected the same way, by the validation methods below.

use serde::{Deserialize, Serialize};

use super::{error::PostError, types::Post};

/// Request payload for creating a new post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn new(user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            content: Some(content.into()),
        }
    }

    /// Checks that both `user_id` and `content` are present and non-empty.
    pub fn validate(self) -> Result<NewPost, PostError> {
        match (non_empty(self.user_id), non_empty(self.content)) {
            (Some(user_id), Some(content)) => Ok(NewPost { user_id, content }),
            _ => Err(PostError::MissingUserIdOrContent),
        }
    }
}

impl NewPost {
    /// Convert into a Post with a freshly generated id.
    pub fn into_post(self) -> Post {
        Post::new(self.user_id, self.content)
    }
}

/// Request payload for updating a post's content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Returns the new content if it is present and non-empty.
    pub fn validate(self) -> Result<String, PostError> {
        non_empty(self.content).ok_or(PostError::MissingContent)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valid() {
        let new_post = CreatePostRequest::new("u1", "hello").validate().unwrap();
        assert_eq!(
            new_post,
            NewPost {
                user_id: "u1".to_string(),
                content: "hello".to_string(),
            }
        );

        let post = new_post.into_post();
        assert_eq!(post.user_id, "u1");
        assert_eq!(post.content, "hello");
        assert!(!post.id.is_empty());
    }

    #[test]
    fn test_create_request_missing_fields() {
        let missing_user: CreatePostRequest =
            serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert_eq!(
            missing_user.validate(),
            Err(PostError::MissingUserIdOrContent)
        );

        let missing_content: CreatePostRequest =
            serde_json::from_str(r#"{"user_id":"u1"}"#).unwrap();
        assert_eq!(
            missing_content.validate(),
            Err(PostError::MissingUserIdOrContent)
        );

        assert_eq!(
            CreatePostRequest::default().validate(),
            Err(PostError::MissingUserIdOrContent)
        );
    }

    #[test]
    fn test_create_request_empty_fields() {
        assert_eq!(
            CreatePostRequest::new("", "hello").validate(),
            Err(PostError::MissingUserIdOrContent)
        );
        assert_eq!(
            CreatePostRequest::new("u1", "").validate(),
            Err(PostError::MissingUserIdOrContent)
        );
    }

    #[test]
    fn test_create_request_ignores_caller_id() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"id":"mine","user_id":"u1","content":"hello"}"#).unwrap();
        let post = request.validate().unwrap().into_post();
        assert_ne!(post.id, "mine");
    }

    #[test]
    fn test_whitespace_content_is_present() {
        let new_post = CreatePostRequest::new("u1", "  ").validate().unwrap();
        assert_eq!(new_post.content, "  ");
        assert_eq!(UpdatePostRequest::new(" ").validate(), Ok(" ".to_string()));
    }

    #[test]
    fn test_update_request() {
        assert_eq!(
            UpdatePostRequest::new("world").validate(),
            Ok("world".to_string())
        );
        assert_eq!(
            UpdatePostRequest::new("").validate(),
            Err(PostError::MissingContent)
        );
        assert_eq!(
            UpdatePostRequest::default().validate(),
            Err(PostError::MissingContent)
        );
    }

    #[test]
    fn test_request_serialization_skips_missing() {
        let json = serde_json::to_string(&UpdatePostRequest::default()).unwrap();
        assert_eq!(json, "{}");

        let json = serde_json::to_value(CreatePostRequest::new("u1", "hi")).unwrap();
        assert_eq!(json, serde_json::json!({"user_id": "u1", "content": "hi"}));
    }
}
