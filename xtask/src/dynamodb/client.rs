//! AWS SDK client setup (Imperative Shell).

use aws_sdk_dynamodb::types::{AttributeDefinition, KeySchemaElement, KeyType};
use aws_sdk_dynamodb::Client;

use super::error::{DynamodbError, Result};
use super::planning::{TableState, TableStatus};

/// AWS client configuration.
#[derive(Debug, Clone)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }
}

impl AwsConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Fetches current table state, returns None if table doesn't exist.
pub async fn get_table_state(client: &Client, table_name: &str) -> Result<Option<TableState>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let Some(table) = response.table() else {
                return Ok(None);
            };

            let status = match table.table_status() {
                Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
                Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
                Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
                _ => TableStatus::Active,
            };

            Ok(Some(TableState {
                status,
                key_schema: describe_key_schema(
                    table.key_schema(),
                    table.attribute_definitions(),
                ),
            }))
        }
        Err(err) => {
            if err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception())
            {
                Ok(None)
            } else {
                Err(DynamodbError::AwsSdk(err.to_string()))
            }
        }
    }
}

/// Render a key schema as `name (type)` pairs, hash key first.
fn describe_key_schema(
    key_schema: &[KeySchemaElement],
    definitions: &[AttributeDefinition],
) -> String {
    let mut keys: Vec<&KeySchemaElement> = key_schema.iter().collect();
    keys.sort_by_key(|k| !matches!(k.key_type(), KeyType::Hash));

    keys.iter()
        .map(|key| {
            let name = key.attribute_name();
            let attribute_type = definitions
                .iter()
                .find(|d| d.attribute_name() == name)
                .map(|d| d.attribute_type().as_str())
                .unwrap_or("?");
            format!("{} ({})", name, attribute_type)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
