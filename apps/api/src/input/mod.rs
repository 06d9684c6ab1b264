// Plain-text file input.
// A received text (an email, a letter) is uploaded and becomes the `input`
// field of a reply-mode generation. Only text/plain is accepted.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::options::MAX_INPUT_CHARS;
use crate::models::Mode;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct FileInputResponse {
    pub input: String,
    pub mode: Mode,
}

/// POST /api/v1/input/file
pub async fn handle_file_input(
    mut multipart: Multipart,
) -> Result<Json<FileInputResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        let input = read_plain_text(content_type.as_deref(), &bytes)?;

        info!(chars = input.chars().count(), "Text file loaded as input");
        return Ok(Json(FileInputResponse {
            input,
            mode: Mode::Reply,
        }));
    }

    Err(AppError::Validation(format!(
        "Upload must contain a '{FILE_FIELD}' field"
    )))
}

/// Accepts `text/plain` (any parameters) holding UTF-8 within the input limit.
pub fn read_plain_text(content_type: Option<&str>, bytes: &[u8]) -> Result<String, AppError> {
    let essence = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());
    if essence.as_deref() != Some("text/plain") {
        return Err(AppError::UnsupportedFileType(
            content_type.unwrap_or("unknown").to_string(),
        ));
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|_| AppError::Validation("The file is not valid UTF-8 text".to_string()))?;
    // A BOM is not part of the text.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let chars = text.chars().count();
    if chars > MAX_INPUT_CHARS {
        return Err(AppError::Validation(format!(
            "The file has {chars} characters; the maximum is {MAX_INPUT_CHARS}"
        )));
    }

    Ok(text.to_string())
}
