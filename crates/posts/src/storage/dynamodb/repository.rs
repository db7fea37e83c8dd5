//! DynamoDB repository implementation.
//!
//! Implements `PostRepository` from `posts_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use posts_core::post::Post;
use posts_core::storage::{PostRepository, RepositoryError, Result};

use super::conversions::{item_to_post, post_key, post_to_item, ATTR_CONTENT};
use super::error::{
    map_delete_item_error, map_put_item_error, map_scan_error, map_update_item_error,
};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// The SDK client is cheap to clone and pools its connections, so a single
/// instance serves every request for the lifetime of the process.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new repository from application configuration.
    ///
    /// Region and credentials come from the AWS SDK default provider chain.
    /// `AWS_ENDPOINT_URL` (via [`Config::aws_endpoint_url`]) points the client
    /// at DynamoDB Local.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = &config.aws_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl PostRepository for DynamoDbRepository {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in output.items.unwrap_or_default() {
                posts.push(item_to_post(&item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    tracing::trace!(table = %self.table_name, "Scan continues on next page");
                    start_key = Some(key);
                }
                _ => break,
            }
        }

        Ok(posts)
    }

    async fn put_post(&self, post: &Post) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(post_to_item(post)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_post_content(&self, id: &str, content: &str) -> Result<Post> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(post_key(id)))
            .update_expression("SET #content = :content")
            .expression_attribute_names("#content", ATTR_CONTENT)
            .expression_attribute_values(":content", AttributeValue::S(content.to_string()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(map_update_item_error)?;

        let attributes = output.attributes.ok_or_else(|| {
            RepositoryError::InvalidData(format!("UpdateItem returned no attributes for {id}"))
        })?;

        item_to_post(&attributes)
    }

    async fn delete_post(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(post_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
