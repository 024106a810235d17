pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::layout::handlers as layout;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form surface
        .route("/api/v1/options", get(generation::handle_options))
        .route("/api/v1/themes", get(layout::handle_themes))
        .route("/api/v1/status", get(generation::handle_status))
        // Book API
        .route("/api/v1/book", get(generation::handle_get_book))
        .route("/api/v1/book/generate", post(generation::handle_generate))
        .route("/api/v1/book/document", get(layout::handle_document))
        .route("/api/v1/book/preview", get(layout::handle_preview))
        .route("/api/v1/book/export", post(export::handle_export))
        .with_state(state)
}
