//! Route modules for Collate Server

pub mod digest;
pub mod health;
pub mod pages;
pub mod share;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
pub fn router(state: AppState) -> Router {
    // Two uploads plus form fields and multipart framing.
    let body_limit = state.config().upload.max_file_bytes * 2 + 1024 * 1024;

    Router::new()
        .route("/", get(pages::home))
        .route("/action", post(pages::action))
        .route("/share", post(share::create).get(share::resolve))
        .route("/share/keys", get(share::peek_keys))
        .route("/api/digest", post(digest::encode))
        .route("/api/digest/verify", post(digest::verify))
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
