use thiserror::Error;

/// Errors that can occur when validating post requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PostError {
    #[error("content and user_id are required")]
    MissingUserIdOrContent,
    #[error("Content is required")]
    MissingContent,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_error_display() {
        assert_eq!(
            PostError::MissingUserIdOrContent.to_string(),
            "content and user_id are required"
        );
        assert_eq!(PostError::MissingContent.to_string(), "Content is required");
        assert_eq!(
            PostError::InvalidBody("expected value".to_string()).to_string(),
            "Invalid request body: expected value"
        );
    }
}
