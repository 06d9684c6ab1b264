use std::sync::Arc;
use std::time::Duration;

use crate::export::ExportCapability;
use crate::generation::gate::GenerationGate;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Default: GeminiClient.
    pub generator: Arc<dyn TextGenerator>,
    /// Busy flag guarding re-entrant generation.
    pub gate: GenerationGate,
    /// Readiness of the two document encoders.
    pub exports: ExportCapability,
    pub generation_timeout: Option<Duration>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, exports: ExportCapability) -> Self {
        Self {
            generator,
            gate: GenerationGate::new(),
            exports,
            generation_timeout: None,
        }
    }

    pub fn with_generation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.generation_timeout = timeout;
        self
    }
}
