mod error;
mod operations;
mod requests;
mod types;

pub use error::PostError;
pub use operations::PostOperation;
pub use requests::{CreatePostRequest, NewPost, UpdatePostRequest};
pub use types::Post;
