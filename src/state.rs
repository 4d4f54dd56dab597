//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{EnrichmentService, ExtractionService};
use crate::domain::gateways::GithubGateway;

/// Immutable per-process state.
///
/// Holds only services and clients; no request data is stored here, so
/// concurrent requests never observe each other.
#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub enrichment_service: Arc<EnrichmentService>,
    /// Used directly by the health check.
    pub github: Arc<dyn GithubGateway>,
}

impl AppState {
    pub fn new(
        extraction_service: Arc<ExtractionService>,
        enrichment_service: Arc<EnrichmentService>,
        github: Arc<dyn GithubGateway>,
    ) -> Self {
        Self {
            extraction_service,
            enrichment_service,
            github,
        }
    }
}
