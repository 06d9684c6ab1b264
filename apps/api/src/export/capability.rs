//! Export capability readiness.
//!
//! Whatever loads the encoders flips the signal exactly once; callers either
//! read it (`is_ready`) or await it (`wait_ready`). Nothing polls.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use crate::export::{render_docx, render_pdf};
use crate::models::{GeneratedText, Typography};

#[derive(Debug, Clone)]
pub struct ExportCapability {
    ready_tx: Arc<watch::Sender<bool>>,
    ready_rx: watch::Receiver<bool>,
}

impl Default for ExportCapability {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportCapability {
    /// Starts not ready.
    pub fn new() -> Self {
        let (ready_tx, ready_rx) = watch::channel(false);
        Self {
            ready_tx: Arc::new(ready_tx),
            ready_rx,
        }
    }

    pub fn mark_ready(&self) {
        self.ready_tx.send_replace(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// Resolves once the capability is ready; immediately if it already is.
    /// Callers bound the wait with `tokio::time::timeout`.
    pub async fn wait_ready(&self) {
        let mut rx = self.ready_rx.clone();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|ready| *ready).await;
    }

    /// Encodes a probe document in both formats, then signals readiness.
    ///
    /// On failure the capability stays not-ready and export requests keep
    /// being refused; the error is logged.
    pub async fn warm_up(&self) {
        let probe = GeneratedText::new("Penwright\n\nexport probe");
        let typography = Typography::default();

        let pdf = render_pdf(probe.clone(), typography).await;
        let docx = render_docx(probe, typography).await;

        match (pdf, docx) {
            (Ok(pdf), Ok(docx)) => {
                info!(
                    pdf_bytes = pdf.bytes.len(),
                    docx_bytes = docx.bytes.len(),
                    "Export capabilities ready"
                );
                self.mark_ready();
            }
            (pdf, docx) => {
                if let Err(e) = pdf {
                    error!("PDF export capability failed to load: {e}");
                }
                if let Err(e) = docx {
                    error!("DOCX export capability failed to load: {e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_starts_not_ready() {
        let capability = ExportCapability::new();
        assert!(!capability.is_ready());
        capability.mark_ready();
        assert!(capability.is_ready());
    }

    #[tokio::test]
    async fn test_clones_observe_the_signal() {
        let capability = ExportCapability::new();
        let observer = capability.clone();
        capability.mark_ready();
        assert!(observer.is_ready());
    }

    #[tokio::test]
    async fn test_wait_ready_resolves_after_signal() {
        let capability = ExportCapability::new();
        let waiter = capability.clone();
        let handle = tokio::spawn(async move { waiter.wait_ready().await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!handle.is_finished());

        capability.mark_ready();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_warm_up_marks_ready() {
        let capability = ExportCapability::new();
        capability.warm_up().await;
        assert!(capability.is_ready());
    }
}
