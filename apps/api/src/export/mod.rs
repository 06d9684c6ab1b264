// Export Engine: generated text + typography → downloadable documents.
// The two kinds are independent: separate encoders, no shared mutable state,
// and a failure in one never touches the other.
// Encoding is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod capability;
pub mod font_metrics;
pub mod fonts;
pub mod handlers;
pub mod print_flow;
pub mod structured;
pub mod wrap;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

use crate::models::{GeneratedText, Typography};

pub use capability::ExportCapability;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Pdf,
    Docx,
}

impl ExportKind {
    pub fn filename(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "gegenereerde_tekst.pdf",
            ExportKind::Docx => "gegenereerde_tekst.docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "application/pdf",
            ExportKind::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF encoding failed: {0}")]
    Pdf(String),

    #[error("DOCX packing failed: {0}")]
    Docx(String),
}

impl ExportError {
    pub fn new(kind: ExportKind, message: impl Into<String>) -> Self {
        match kind {
            ExportKind::Pdf => ExportError::Pdf(message.into()),
            ExportKind::Docx => ExportError::Docx(message.into()),
        }
    }

    pub fn kind(&self) -> ExportKind {
        match self {
            ExportError::Pdf(_) => ExportKind::Pdf,
            ExportError::Docx(_) => ExportKind::Docx,
        }
    }
}

/// An encoded document ready for download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub kind: ExportKind,
    pub bytes: Bytes,
}

impl ExportArtifact {
    pub fn filename(&self) -> &'static str {
        self.kind.filename()
    }

    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }
}

/// Print-flow document, synchronously.
pub fn export_pdf(
    text: &GeneratedText,
    typography: Typography,
) -> Result<ExportArtifact, ExportError> {
    let page = print_flow::to_print_flow(text, typography);
    let bytes = print_flow::encode_pdf(&page)?;
    Ok(ExportArtifact {
        kind: ExportKind::Pdf,
        bytes: Bytes::from(bytes),
    })
}

/// Structured document, synchronously.
pub fn export_docx(
    text: &GeneratedText,
    typography: Typography,
) -> Result<ExportArtifact, ExportError> {
    let document = structured::to_structured_document(text, typography);
    let bytes = structured::pack_docx(&document)?;
    Ok(ExportArtifact {
        kind: ExportKind::Docx,
        bytes: Bytes::from(bytes),
    })
}

/// `export_pdf` on the blocking pool.
pub async fn render_pdf(
    text: GeneratedText,
    typography: Typography,
) -> Result<ExportArtifact, ExportError> {
    on_blocking_pool(ExportKind::Pdf, move || export_pdf(&text, typography)).await
}

/// `export_docx` on the blocking pool.
pub async fn render_docx(
    text: GeneratedText,
    typography: Typography,
) -> Result<ExportArtifact, ExportError> {
    on_blocking_pool(ExportKind::Docx, move || export_docx(&text, typography)).await
}

/// Runs one encoder job. A panicking job becomes an error of its own kind.
async fn on_blocking_pool<F>(kind: ExportKind, job: F) -> Result<ExportArtifact, ExportError>
where
    F: FnOnce() -> Result<ExportArtifact, ExportError> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| ExportError::new(kind, format!("encoder task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Font, FontSize};

    fn sample() -> GeneratedText {
        GeneratedText::new("Dear Sir/Madam,\n\nPlease find invoice 123 attached.\nKind regards")
    }

    #[test]
    fn test_artifact_filenames_are_fixed() {
        let pdf = export_pdf(&sample(), Typography::default()).unwrap();
        let docx = export_docx(&sample(), Typography::default()).unwrap();
        assert_eq!(pdf.filename(), "gegenereerde_tekst.pdf");
        assert_eq!(docx.filename(), "gegenereerde_tekst.docx");
        assert_eq!(pdf.content_type(), "application/pdf");
    }

    #[test]
    fn test_both_exports_are_idempotent() {
        let typography = Typography {
            font: Font::Calibri,
            font_size: FontSize::Pt12,
        };
        let text = sample();
        assert_eq!(
            export_pdf(&text, typography).unwrap().bytes,
            export_pdf(&text, typography).unwrap().bytes
        );
        assert_eq!(
            export_docx(&text, typography).unwrap().bytes,
            export_docx(&text, typography).unwrap().bytes
        );
    }

    #[test]
    fn test_exports_do_not_touch_the_text() {
        let text = sample();
        let before = text.clone();
        let _ = export_pdf(&text, Typography::default()).unwrap();
        let _ = export_docx(&text, Typography::default()).unwrap();
        assert_eq!(text, before);
    }

    #[tokio::test]
    async fn test_concurrent_renders_match_sequential_output() {
        let text = sample();
        let typography = Typography::default();
        let (pdf, docx) = tokio::join!(
            render_pdf(text.clone(), typography),
            render_docx(text.clone(), typography)
        );
        assert_eq!(
            pdf.unwrap().bytes,
            export_pdf(&text, typography).unwrap().bytes
        );
        assert_eq!(
            docx.unwrap().bytes,
            export_docx(&text, typography).unwrap().bytes
        );
    }

    #[tokio::test]
    async fn test_crashed_pdf_encoder_leaves_docx_untouched() {
        let text = sample();
        let typography = Typography::default();
        let (pdf, docx) = tokio::join!(
            on_blocking_pool(ExportKind::Pdf, || panic!("encoder crashed")),
            render_docx(text.clone(), typography)
        );

        let err = pdf.unwrap_err();
        assert_eq!(err.kind(), ExportKind::Pdf);
        assert_eq!(
            docx.unwrap().bytes,
            export_docx(&text, typography).unwrap().bytes
        );
        // The PDF path itself still works afterwards.
        assert!(render_pdf(text, typography).await.is_ok());
    }

    #[test]
    fn test_error_kind_follows_variant() {
        assert_eq!(ExportError::Pdf("x".into()).kind(), ExportKind::Pdf);
        assert_eq!(ExportError::Docx("x".into()).kind(), ExportKind::Docx);
        assert_eq!(ExportError::new(ExportKind::Pdf, "x").kind(), ExportKind::Pdf);
    }
}
