//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `PostRepository`
//! trait defined in `posts_core::storage`. The backend used by the server is
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//! - `inmemory`: process-local storage, for development without AWS
//!
//! These features are mutually exclusive. The in-memory backend is always
//! compiled for tests.
//!
//! # Examples
//!
//! Build with DynamoDB (default):
//! ```bash
//! cargo build -p posts
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p posts --no-default-features --features inmemory
//! ```

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p posts --no-default-features --features inmemory"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryRepository;
