//! Post CRUD handlers.
//!
//! Each handler validates its input, makes exactly one repository call and
//! translates the outcome. There are no retries and no existence checks.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use posts_core::post::{CreatePostRequest, Post, PostOperation, UpdatePostRequest};

use crate::{handlers::ApiError, state::AppState};

fn success_status(operation: PostOperation) -> StatusCode {
    StatusCode::from_u16(operation.success_status()).unwrap_or(StatusCode::OK)
}

/// List all posts (GET /posts).
#[axum::debug_handler]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    tracing::debug!("Received list posts request");

    let posts = state
        .posts
        .list_posts()
        .await
        .map_err(ApiError::store(PostOperation::List))?;

    tracing::debug!(count = posts.len(), "Listed posts");

    Ok(Json(posts))
}

/// Create a new post (POST /posts).
///
/// The id is always generated here; an `id` in the body is ignored.
#[axum::debug_handler]
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create post request");

    let post = payload.validate()?.into_post();

    state
        .posts
        .put_post(&post)
        .await
        .map_err(ApiError::store(PostOperation::Create))?;

    tracing::info!(post_id = %post.id, user_id = %post.user_id, "Created new post");

    Ok((success_status(PostOperation::Create), Json(post)))
}

/// Update a post's content (PUT /posts/{post_id}).
///
/// A missing record is not an error: the store creates one holding only the
/// id and the new content.
#[axum::debug_handler]
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(payload) = payload?;
    tracing::debug!(post_id = %post_id, payload = ?payload, "Received update post request");

    let content = payload.validate()?;

    let post = state
        .posts
        .update_post_content(&post_id, &content)
        .await
        .map_err(ApiError::store(PostOperation::Update))?;

    tracing::info!(post_id = %post_id, "Updated post");

    Ok(Json(post))
}

/// Delete a post (DELETE /posts/{post_id}).
///
/// Succeeds whether or not the record existed.
#[axum::debug_handler]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(post_id = %post_id, "Received delete post request");

    state
        .posts
        .delete_post(&post_id)
        .await
        .map_err(ApiError::store(PostOperation::Delete))?;

    tracing::info!(post_id = %post_id, "Deleted post");

    Ok(success_status(PostOperation::Delete))
}
