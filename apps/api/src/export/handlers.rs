//! Axum route handlers for the Export API.

use std::time::Duration;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::export::{render_docx, render_pdf, ExportArtifact};
use crate::models::{Font, FontSize, GeneratedText, Typography};
use crate::state::AppState;

/// How long a request made during warm-up waits for the encoders.
const READY_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub text: GeneratedText,
    #[serde(default)]
    pub font: Font,
    #[serde(default)]
    pub font_size: FontSize,
}

impl ExportRequest {
    fn typography(&self) -> Typography {
        Typography {
            font: self.font,
            font_size: self.font_size,
        }
    }
}

/// POST /api/v1/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    check_ready(&state, &request).await?;
    let typography = request.typography();
    let artifact = render_pdf(request.text, typography).await?;
    Ok(attachment(artifact))
}

/// POST /api/v1/export/docx
pub async fn handle_export_docx(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    check_ready(&state, &request).await?;
    let typography = request.typography();
    let artifact = render_docx(request.text, typography).await?;
    Ok(attachment(artifact))
}

/// Exports are refused for empty text, and when the encoders are still not
/// loaded after a short grace period.
async fn check_ready(state: &AppState, request: &ExportRequest) -> Result<(), AppError> {
    if request.text.is_empty() {
        return Err(AppError::Validation(
            "There is no generated text to export".to_string(),
        ));
    }
    if !state.exports.is_ready() {
        tokio::time::timeout(READY_GRACE, state.exports.wait_ready())
            .await
            .map_err(|_| AppError::ExportsNotReady)?;
    }
    Ok(())
}

fn attachment(artifact: ExportArtifact) -> Response {
    info!(
        kind = ?artifact.kind,
        bytes = artifact.bytes.len(),
        "Export rendered"
    );
    (
        [
            (header::CONTENT_TYPE, artifact.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename()),
            ),
        ],
        artifact.bytes,
    )
        .into_response()
}
