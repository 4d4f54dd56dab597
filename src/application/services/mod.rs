//! Business logic services for the application layer.

pub mod enrichment_service;
pub mod extraction_service;

pub use enrichment_service::EnrichmentService;
pub use extraction_service::{Extraction, ExtractionService};
