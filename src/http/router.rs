//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Registry endpoints, versioned
    let api_v1 = Router::new()
        .route("/users", get(handlers::list_users))
        .route("/users", post(handlers::create_user))
        .route("/users/{user_id}", get(handlers::get_user))
        .route("/users/{user_id}/items", get(handlers::list_user_items))
        .route("/users/{user_id}/items", post(handlers::create_user_item))
        .route("/items", post(handlers::create_item))
        .route("/items/{item_id}", get(handlers::get_item));

    // Demonstration endpoints keep their original root-level paths
    Router::new()
        .route("/", get(handlers::root_greeting))
        .route("/health", get(handlers::health_check))
        .route("/hello", get(handlers::hello))
        .route("/hy", get(handlers::hy))
        .route("/item/{item}", get(handlers::path_echo))
        .route("/query/", get(handlers::query_echo))
        .route("/models/{model_name}", get(handlers::get_model))
        .route("/items/", post(handlers::echo_student))
        .route("/form/data", post(handlers::form_data))
        .route("/form/data/filedata", post(handlers::form_file_data))
        .route("/file/upload", post(handlers::file_upload))
        .route("/error/handling", get(handlers::error_probe))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
