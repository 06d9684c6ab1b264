//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::composer::compose;
use crate::generation::validation::validate_options;
use crate::llm_client::LlmError;
use crate::models::options::{option_catalog, OptionCatalog};
use crate::models::{GeneratedText, GenerationOptions};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub instruction: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub generation_id: Uuid,
    pub text: GeneratedText,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub busy: bool,
    pub exports_ready: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/options
///
/// Every selectable value with its display label, plus the form defaults.
pub async fn handle_options() -> Json<OptionCatalog> {
    Json(option_catalog())
}

/// GET /api/v1/status
pub async fn handle_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        busy: state.gate.is_busy(),
        exports_ready: state.exports.is_ready(),
    })
}

/// POST /api/v1/compose
///
/// Returns the exact instruction a generate call would send. No external call.
pub async fn handle_compose(
    Json(options): Json<GenerationOptions>,
) -> Result<Json<ComposeResponse>, AppError> {
    validate_options(&options)?;
    Ok(Json(ComposeResponse {
        instruction: compose(&options),
    }))
}

/// POST /api/v1/generate
///
/// validate → acquire busy gate → compose → one call to the generator.
/// The gate is released when the guard drops, whatever the outcome.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(options): Json<GenerationOptions>,
) -> Result<Json<GenerateResponse>, AppError> {
    validate_options(&options)?;

    let _guard = state.gate.try_acquire().ok_or_else(|| {
        warn!("Generate request rejected: a generation is already in flight");
        AppError::Busy
    })?;

    let generation_id = Uuid::new_v4();
    let instruction = compose(&options);
    info!(
        %generation_id,
        format = options.format.value(),
        mode = options.mode.value(),
        instruction_chars = instruction.chars().count(),
        "Generation started"
    );

    let call = state.generator.generate(&instruction);
    let result = match state.generation_timeout {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .unwrap_or(Err(LlmError::Timeout { limit })),
        None => call.await,
    };

    let text = result.map_err(|e| {
        warn!(%generation_id, "Generation failed: {e}");
        AppError::from(e)
    })?;

    info!(
        %generation_id,
        text_chars = text.as_str().chars().count(),
        "Generation finished"
    );

    Ok(Json(GenerateResponse {
        generation_id,
        text,
        generated_at: Utc::now(),
    }))
}
