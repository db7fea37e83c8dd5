//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and posts.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use posts_core::post::Post;
use posts_core::storage::RepositoryError;

pub const ATTR_ID: &str = "id";
pub const ATTR_USER_ID: &str = "user_id";
pub const ATTR_CONTENT: &str = "content";

/// Convert a Post to a DynamoDB item.
pub fn post_to_item(post: &Post) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(post.id.clone()));
    item.insert(
        ATTR_USER_ID.to_string(),
        AttributeValue::S(post.user_id.clone()),
    );
    item.insert(
        ATTR_CONTENT.to_string(),
        AttributeValue::S(post.content.clone()),
    );

    item
}

/// Convert a DynamoDB item to a Post.
///
/// `user_id` may be absent on items created by an update against a missing key.
pub fn item_to_post(item: &HashMap<String, AttributeValue>) -> Result<Post, RepositoryError> {
    Ok(Post {
        id: get_string(item, ATTR_ID)?,
        user_id: get_optional_string(item, ATTR_USER_ID).unwrap_or_default(),
        content: get_string(item, ATTR_CONTENT)?,
    })
}

/// Build the primary key for a post.
pub fn post_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "550e8400-e29b-41d4-a716-446655440003".to_string(),
            user_id: "u1".to_string(),
            content: "hello".to_string(),
        }
    }

    #[test]
    fn test_post_to_item_attributes() {
        let item = post_to_item(&sample_post());

        assert_eq!(item.len(), 3);
        assert_eq!(
            item.get("id").unwrap().as_s().unwrap(),
            "550e8400-e29b-41d4-a716-446655440003"
        );
        assert_eq!(item.get("user_id").unwrap().as_s().unwrap(), "u1");
        assert_eq!(item.get("content").unwrap().as_s().unwrap(), "hello");
    }

    #[test]
    fn test_item_to_post() {
        let post = sample_post();
        let item = post_to_item(&post);

        assert_eq!(item_to_post(&item).unwrap(), post);
    }

    #[test]
    fn test_item_without_user_id() {
        let mut item = post_key("ghost");
        item.insert("content".to_string(), AttributeValue::S("boo".to_string()));

        let post = item_to_post(&item).unwrap();
        assert_eq!(post.id, "ghost");
        assert_eq!(post.user_id, "");
        assert_eq!(post.content, "boo");
    }

    #[test]
    fn test_item_missing_content() {
        let item = post_key("abc");

        assert_eq!(
            item_to_post(&item),
            Err(RepositoryError::InvalidData(
                "Missing or invalid field: content".to_string()
            ))
        );
    }

    #[test]
    fn test_item_with_wrong_type() {
        let mut item = post_key("abc");
        item.insert("content".to_string(), AttributeValue::N("42".to_string()));

        assert!(matches!(
            item_to_post(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_post_key() {
        let key = post_key("abc");
        assert_eq!(key.len(), 1);
        assert_eq!(key.get("id").unwrap().as_s().unwrap(), "abc");
    }
}
