use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::export::{ExportError, ExportKind};
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is recoverable: the caller fixes the input or simply retries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Generation API key is not configured")]
    MissingCredential,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A generation is already in progress")]
    Busy,

    #[error("Generation failed: {0}")]
    Generation(LlmError),

    #[error("Export capabilities are not ready")]
    ExportsNotReady,

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingCredential => AppError::MissingCredential,
            other => AppError::Generation(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::EmptyInput => (
                StatusCode::BAD_REQUEST,
                "EMPTY_INPUT",
                "Enter an instruction or a text to respond to.".to_string(),
            ),
            AppError::MissingCredential => (
                StatusCode::PRECONDITION_FAILED,
                "MISSING_CREDENTIAL",
                "The generation service API key is not configured.".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Busy => (
                StatusCode::CONFLICT,
                "GENERATION_BUSY",
                "A generation is already in progress.".to_string(),
            ),
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_FAILED",
                    "The text could not be generated. Check the API key and try again."
                        .to_string(),
                )
            }
            AppError::ExportsNotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                "EXPORTS_NOT_READY",
                "Export capabilities are still loading.".to_string(),
            ),
            AppError::Export(e) => {
                tracing::error!("Export error: {e}");
                match e.kind() {
                    ExportKind::Pdf => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PDF_EXPORT_ERROR",
                        "The PDF file could not be created.".to_string(),
                    ),
                    ExportKind::Docx => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DOCX_EXPORT_ERROR",
                        "The Word file could not be created.".to_string(),
                    ),
                }
            }
            AppError::UnsupportedFileType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FILE_TYPE",
                format!("Only .txt files are accepted (got {msg})."),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
