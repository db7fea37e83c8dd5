use std::env;

/// Default DynamoDB table holding posts.
pub const DEFAULT_TABLE_NAME: &str = "post";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table name (default: "post")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: unset)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub aws_endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "post")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (default: AWS)
    ///
    /// Region and credentials are resolved by the AWS SDK itself.
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("DYNAMODB_TABLE_NAME");
        env::remove_var("AWS_ENDPOINT_URL");

        let config = Config::from_env();

        assert_eq!(config.table_name, "post");
        assert_eq!(config.aws_endpoint_url, None);
    }
}
