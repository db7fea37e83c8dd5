//! posts_client - CLI client for the posts API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::PostsClient;
pub use error::{ClientError, Result};
