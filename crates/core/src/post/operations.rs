//! Pure descriptions of the four post operations.

/// One of the operations exposed over the `/posts` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOperation {
    List,
    Create,
    Update,
    Delete,
}

impl PostOperation {
    /// Message returned to the caller when the store fails during this operation.
    ///
    /// The underlying error is never exposed; it is only logged.
    pub fn failure_message(self) -> &'static str {
        match self {
            PostOperation::List => "Could not fetch posts",
            PostOperation::Create => "Could not create post",
            PostOperation::Update => "Could not update post",
            PostOperation::Delete => "Could not delete post",
        }
    }

    /// HTTP status code returned when this operation succeeds.
    pub fn success_status(self) -> u16 {
        match self {
            PostOperation::List | PostOperation::Update => 200,
            PostOperation::Create => 201,
            PostOperation::Delete => 204,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PostOperation::List => "list",
            PostOperation::Create => "create",
            PostOperation::Update => "update",
            PostOperation::Delete => "delete",
        }
    }
}

impl std::fmt::Display for PostOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        assert_eq!(PostOperation::List.failure_message(), "Could not fetch posts");
        assert_eq!(PostOperation::Create.failure_message(), "Could not create post");
        assert_eq!(PostOperation::Update.failure_message(), "Could not update post");
        assert_eq!(PostOperation::Delete.failure_message(), "Could not delete post");
    }

    #[test]
    fn test_success_status() {
        assert_eq!(PostOperation::List.success_status(), 200);
        assert_eq!(PostOperation::Create.success_status(), 201);
        assert_eq!(PostOperation::Update.success_status(), 200);
        assert_eq!(PostOperation::Delete.success_status(), 204);
    }

    #[test]
    fn test_display() {
        assert_eq!(PostOperation::Delete.to_string(), "delete");
    }
}
