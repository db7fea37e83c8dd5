//! HTTP client for the posts API.

pub mod health;
pub mod posts;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// HTTP client for the posts API.
#[derive(Debug, Clone)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: String,
}

/// Error body returned by the server on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl PostsClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (POSTS_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("POSTS_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle responses that carry a JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(server_error(status.as_u16(), response).await)
        }
    }

    /// Handle responses with no body expected.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(server_error(status.as_u16(), response).await)
        }
    }
}

async fn server_error(status: u16, response: reqwest::Response) -> ClientError {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::ServerError {
        status,
        message: error_message(&body),
    }
}

/// Extract the `error` field from a failure body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.to_string())
}
