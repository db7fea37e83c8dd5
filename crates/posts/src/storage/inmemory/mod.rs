//! In-memory storage backend.
//!
//! Stores posts in a `HashMap` wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the process exits. Semantics match the DynamoDB
//! backend: puts overwrite, updates upsert, deletes never fail on a missing key.
//!
//! # Example
//!
//! ```rust,ignore
//! use posts::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
