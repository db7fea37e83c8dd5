//! Error responses for the post handlers.
//!
//! Only two kinds of failure reach the caller: invalid input (400) and a store
//! that could not complete the request (500). Store details are logged here
//! and never leave the process.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use posts_core::post::{PostError, PostOperation};
use posts_core::storage::RepositoryError;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] PostError),
    #[error("{operation} failed: {source}")]
    StoreUnavailable {
        operation: PostOperation,
        source: RepositoryError,
    },
}

impl ApiError {
    /// Returns a closure that wraps a repository error for `operation`.
    ///
    /// Meant for `map_err` on repository calls.
    pub fn store(operation: PostOperation) -> impl FnOnce(RepositoryError) -> Self {
        move |source| ApiError::StoreUnavailable { operation, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(PostError::InvalidBody(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            ApiError::Validation(err) => {
                tracing::warn!(status = %status, error = %err, "Rejected invalid request");
                err.to_string()
            }
            ApiError::StoreUnavailable { operation, source } => {
                tracing::error!(
                    status = %status,
                    operation = %operation,
                    error = %source,
                    "Store request failed"
                );
                operation.failure_message().to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorBody {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let response = ApiError::from(PostError::MissingContent).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.error, "Content is required");
    }

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let err = ApiError::store(PostOperation::Create)(RepositoryError::ConnectionFailed(
            "secret endpoint http://10.0.0.1".to_string(),
        ));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, "Could not create post");
    }

    #[test]
    fn test_store_error_display_keeps_details() {
        let err = ApiError::store(PostOperation::List)(RepositoryError::QueryFailed(
            "Table not found".to_string(),
        ));
        assert_eq!(err.to_string(), "list failed: Query failed: Table not found");
    }
}
