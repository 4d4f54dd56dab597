//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`github`] - GitHub REST API client (`reqwest`)
//! - [`pdf`] - PDF link annotation reader (`lopdf`)
//! - [`markdown`] - Markdown rendering and plain-text reduction (`pulldown-cmark`)

pub mod github;
pub mod markdown;
pub mod pdf;
