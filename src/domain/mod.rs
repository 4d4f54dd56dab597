//! Domain layer containing entities and the seams to external systems.
//!
//! # Architecture
//!
//! - [`entities`] - References, raw GitHub payloads, and shaped records
//! - [`fetch`] - Tagged outcome of a remote lookup
//! - [`gateways`] - Traits for GitHub access, PDF reading, and markdown rendering
//!
//! # Design Principles
//!
//! - The domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])
//!
//! # Request Flow
//!
//! 1. An uploaded PDF is read through [`gateways::PdfLinkReader`]
//! 2. Matching links are classified into [`entities::GithubReference`]s
//! 3. Each reference is resolved through [`gateways::GithubGateway`]
//! 4. Results are shaped into [`entities::EnrichedRecord`]s

pub mod entities;
pub mod fetch;
pub mod gateways;
