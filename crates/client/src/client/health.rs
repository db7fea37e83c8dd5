//! Health check operations.

use super::PostsClient;
use crate::error::Result;

impl PostsClient {
    /// Check that the server is accepting connections.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.handle_empty_response(response).await
    }
}
