use axum::{
    http::{header, Method},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        posts::{create_post, delete_post, list_posts, update_post},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let post_routes = Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/{post_id}", put(update_post).delete(delete_post))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(post_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
