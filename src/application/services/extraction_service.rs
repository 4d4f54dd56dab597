//! Link extraction from uploaded PDFs.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::gateways::PdfLinkReader;
use crate::error::AppError;
use crate::utils::link_classifier::LinkClassifier;
use crate::utils::summary::truncate_chars;

/// Number of characters of document text returned as a preview.
pub const TEXT_SNIPPET_CHARS: usize = 500;

/// Outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub page_count: usize,
    /// Unique platform URLs in first-seen order.
    pub urls: Vec<String>,
    pub text_snippet: Option<String>,
}

/// Service that turns PDF bytes into a list of platform links.
///
/// Parsing is CPU-bound, so it runs on the blocking thread pool and never
/// stalls the async executor.
pub struct ExtractionService {
    reader: Arc<dyn PdfLinkReader>,
    classifier: Arc<LinkClassifier>,
}

impl ExtractionService {
    /// Creates a new extraction service.
    pub fn new(reader: Arc<dyn PdfLinkReader>, classifier: Arc<LinkClassifier>) -> Self {
        Self { reader, classifier }
    }

    /// Reads the PDF and returns its unique platform links.
    ///
    /// A document without pages or without matching link annotations yields an
    /// empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unprocessable`] if the PDF is corrupt or encrypted.
    /// Returns [`AppError::Internal`] if the parsing task panics.
    pub async fn extract(&self, bytes: Vec<u8>) -> Result<Extraction, AppError> {
        let reader = Arc::clone(&self.reader);
        let size = bytes.len();

        let contents = tokio::task::spawn_blocking(move || reader.read(&bytes))
            .await
            .map_err(|e| {
                AppError::internal("PDF parsing task failed", json!({ "reason": e.to_string() }))
            })??;

        let total = contents.link_uris.len();
        let urls = filter_platform_links(contents.link_uris, &self.classifier);

        info!(
            bytes = size,
            pages = contents.page_count,
            annotations = total,
            matched = urls.len(),
            "PDF processed"
        );

        Ok(Extraction {
            page_count: contents.page_count,
            urls,
            text_snippet: contents
                .text
                .map(|text| truncate_chars(text.trim(), TEXT_SNIPPET_CHARS)),
        })
    }
}

/// Keeps URLs on the target domain, dropping repeats after the first.
pub fn filter_platform_links(uris: Vec<String>, classifier: &LinkClassifier) -> Vec<String> {
    let mut seen = HashSet::new();

    uris.into_iter()
        .filter(|uri| {
            let keep = classifier.matches_domain(uri);
            if !keep {
                debug!(uri = %uri, "Skipping link outside target domain");
            }
            keep
        })
        .filter(|uri| seen.insert(uri.clone()))
        .collect()
}
