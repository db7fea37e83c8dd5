//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `PostRepository`
//! using `aws-sdk-dynamodb`. Posts live in a single table whose partition key
//! is the string attribute `id`.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
