//! Table configuration types (Functional Core - pure data).

/// Default table name, shared with the server's `DYNAMODB_TABLE_NAME` default.
pub const DEFAULT_TABLE_NAME: &str = "post";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl AttributeType {
    /// DynamoDB's short code for the type.
    pub fn code(self) -> &'static str {
        match self {
            AttributeType::String => "S",
        }
    }
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Key schema as `name (type)`, used to compare against a live table.
    pub fn key_schema_display(&self) -> String {
        format!(
            "{} ({})",
            self.partition_key.name,
            self.partition_key.attribute_type.code()
        )
    }
}

/// Returns the canonical table configuration for posts.
/// This is a pure function - no I/O.
pub fn posts_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: "id".to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_table_config() {
        let config = posts_table_config();
        assert_eq!(config.table_name, "post");
        assert_eq!(config.partition_key.name, "id");
        assert_eq!(config.key_schema_display(), "id (S)");
    }

    #[test]
    fn test_with_table_name() {
        let config = posts_table_config().with_table_name("posts-dev");
        assert_eq!(config.table_name, "posts-dev");
    }
}
