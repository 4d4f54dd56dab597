//! Application layer services implementing the pipeline.
//!
//! Services consume the gateway traits from [`crate::domain::gateways`] and
//! provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::extraction_service::ExtractionService`] - PDF to platform links
//! - [`services::enrichment_service::EnrichmentService`] - Links to shaped records

pub mod services;
