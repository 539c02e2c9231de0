pub mod error;
pub mod handlers;

use crate::core::service::KeywordService;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared by all handlers; the service (and its API client) is built once
/// at startup.
pub struct AppState {
    pub service: KeywordService,
    pub language_id: String,
    pub location_id: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/api/keyword", get(handlers::api_keyword))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
