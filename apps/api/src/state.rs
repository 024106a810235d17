use std::sync::Arc;

use crate::export::PdfExporter;
use crate::generation::generator::BookGenerator;
use crate::studio::Studio;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generator wired to the model client built at startup.
    pub generator: BookGenerator,
    pub exporter: Arc<dyn PdfExporter>,
    pub studio: Arc<Studio>,
}
