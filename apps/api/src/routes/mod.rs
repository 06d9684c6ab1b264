pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export;
use crate::generation::handlers as generation;
use crate::input;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route("/api/v1/options", get(generation::handle_options))
        .route("/api/v1/status", get(generation::handle_status))
        .route("/api/v1/compose", post(generation::handle_compose))
        .route("/api/v1/generate", post(generation::handle_generate))
        // Export API
        .route("/api/v1/export/pdf", post(export::handle_export_pdf))
        .route("/api/v1/export/docx", post(export::handle_export_docx))
        // Input API
        .route("/api/v1/input/file", post(input::handle_file_input))
        .with_state(state)
}
