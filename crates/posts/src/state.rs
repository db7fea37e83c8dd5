//! Application state with repository-based storage.
//!
//! The state holds the single store handle shared by every request. It is
//! built once at startup and injected into the router; handlers never reach
//! for a global.

use std::sync::Arc;

use posts_core::storage::PostRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler. Cloning only bumps the reference count
/// of the repository.
#[derive(Clone)]
pub struct AppState {
    /// Post repository backed by the configured store.
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Creates an AppState around an already constructed repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }
}

// ============================================================================
// Factory functions for the different storage backends
// ============================================================================

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::DynamoDbRepository;

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = DynamoDbRepository::from_config(config).await;

            tracing::info!(
                backend = "dynamodb",
                table = repo.table_name(),
                endpoint = config.aws_endpoint_url.as_deref().unwrap_or("aws"),
                "Initialized post storage"
            );

            Ok(Self::with_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(
                backend = "inmemory",
                table = %config.table_name,
                "Initialized post storage (data is not persisted)"
            );

            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}
