//! # Link Lens
//!
//! Pulls GitHub links out of uploaded PDF documents (typically résumés) and
//! enriches them with profile and repository data from the GitHub REST API.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, the fetch outcome type and gateway traits
//! - **Application Layer** ([`application`]) - Extraction and enrichment services
//! - **Infrastructure Layer** ([`infrastructure`]) - GitHub HTTP client, PDF reader, markdown renderer
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export GITHUB_TOKEN="ghp_..."
//! cargo run
//!
//! curl -F file=@resume.pdf http://localhost:3000/api/extract
//! curl -H 'content-type: application/json' \
//!      -d '{"links":["https://github.com/rust-lang/rust"]}' \
//!      http://localhost:3000/api/github-data
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{EnrichmentService, Extraction, ExtractionService};
    pub use crate::domain::entities::{EnrichedRecord, GithubReference};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
