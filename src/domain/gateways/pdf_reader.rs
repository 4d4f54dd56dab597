//! PDF reading seam.

use thiserror::Error;

/// Errors raised while loading a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF could not be parsed: {0}")]
    Unreadable(String),

    #[error("PDF is password protected")]
    Encrypted,
}

/// Everything the extractor needs from a loaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfContents {
    pub page_count: usize,
    /// URIs of every link annotation, page by page in page order, then in
    /// annotation order within a page. Duplicates are kept.
    pub link_uris: Vec<String>,
    /// Text layer of the document, if it could be extracted.
    pub text: Option<String>,
}

/// Loads a PDF and reads its link annotations.
///
/// Implementations read from the given buffer only and retain nothing after
/// returning.
#[cfg_attr(test, mockall::automock)]
pub trait PdfLinkReader: Send + Sync {
    /// # Errors
    ///
    /// Returns [`PdfError::Unreadable`] for corrupt input and
    /// [`PdfError::Encrypted`] for documents that need a password.
    fn read(&self, bytes: &[u8]) -> Result<PdfContents, PdfError>;
}
