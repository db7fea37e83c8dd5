//! Seed command implementation.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use posts_core::post::Post;

use super::error::{DynamodbError, Result};

/// DynamoDB caps BatchWriteItem at 25 requests.
const BATCH_SIZE: usize = 25;

const SAMPLE_CONTENTS: [&str; 8] = [
    "Hello, world!",
    "Shipping the first release today.",
    "Anyone up for lunch?",
    "Reading about consistent hashing.",
    "Coffee first, then code review.",
    "The build is green again.",
    "Notes from the weekly sync are up.",
    "Trying out a new keyboard layout.",
];

/// Generate `count` posts for `user_id`, cycling through sample contents.
pub fn generate_seed_posts(user_id: &str, count: u32) -> Vec<Post> {
    (0..count as usize)
        .map(|i| {
            let content = SAMPLE_CONTENTS[i % SAMPLE_CONTENTS.len()];
            Post::new(user_id, content)
        })
        .collect()
}

fn post_to_item(post: &Post) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(post.id.clone()));
    item.insert("user_id".to_string(), AttributeValue::S(post.user_id.clone()));
    item.insert("content".to_string(), AttributeValue::S(post.content.clone()));
    item
}

/// Insert posts in batches. Returns the number of posts written.
pub async fn seed_posts(client: &Client, table_name: &str, posts: &[Post]) -> Result<u32> {
    let mut inserted = 0u32;

    for chunk in posts.chunks(BATCH_SIZE) {
        let write_requests = chunk
            .iter()
            .map(|post| {
                PutRequest::builder()
                    .set_item(Some(post_to_item(post)))
                    .build()
                    .map(|put| WriteRequest::builder().put_request(put).build())
                    .map_err(|e| DynamodbError::AwsSdk(e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let output = client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        let unprocessed = output
            .unprocessed_items()
            .and_then(|items| items.get(table_name))
            .map_or(0, Vec::len);
        if unprocessed > 0 {
            return Err(DynamodbError::AwsSdk(format!(
                "{} of {} posts were not written (throttled)",
                unprocessed,
                chunk.len()
            )));
        }

        inserted += chunk.len() as u32;
    }

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_seed_posts_count_and_owner() {
        let posts = generate_seed_posts("u1", 30);

        assert_eq!(posts.len(), 30);
        assert!(posts.iter().all(|p| p.user_id == "u1"));
        assert!(posts.iter().all(|p| !p.content.is_empty()));
    }

    #[test]
    fn test_generate_seed_posts_cycles_contents() {
        let posts = generate_seed_posts("u1", 9);

        assert_eq!(posts[0].content, SAMPLE_CONTENTS[0]);
        assert_eq!(posts[8].content, SAMPLE_CONTENTS[0]);
    }

    #[test]
    fn test_generate_seed_posts_unique_ids() {
        let posts = generate_seed_posts("u1", 50);
        let ids: std::collections::HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_post_to_item_attributes() {
        let post = Post::new("u1", "hi").with_id("p1");
        let item = post_to_item(&post);

        assert_eq!(item.get("id"), Some(&AttributeValue::S("p1".to_string())));
        assert_eq!(item.get("user_id"), Some(&AttributeValue::S("u1".to_string())));
        assert_eq!(item.get("content"), Some(&AttributeValue::S("hi".to_string())));
    }

    #[test]
    fn test_generate_zero_posts() {
        assert!(generate_seed_posts("u1", 0).is_empty());
    }
}
