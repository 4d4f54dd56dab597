//! Trait seams between the domain and the outside world.
//!
//! The application services depend only on these traits. Concrete
//! implementations live in [`crate::infrastructure`].
//!
//! # Implementations
//!
//! - [`GithubGateway`] - [`crate::infrastructure::github::HttpGithubGateway`]
//! - [`PdfLinkReader`] - [`crate::infrastructure::pdf::LopdfLinkReader`]
//! - [`MarkdownRenderer`] - [`crate::infrastructure::markdown::PulldownRenderer`]
//!
//! Test mocks are generated with `mockall` under `cfg(test)`.

pub mod github_gateway;
pub mod markdown;
pub mod pdf_reader;

pub use github_gateway::GithubGateway;
pub use markdown::MarkdownRenderer;
pub use pdf_reader::{PdfContents, PdfError, PdfLinkReader};

#[cfg(test)]
pub use github_gateway::MockGithubGateway;
#[cfg(test)]
pub use markdown::MockMarkdownRenderer;
#[cfg(test)]
pub use pdf_reader::MockPdfLinkReader;
