//! DTOs for the PDF extraction endpoint.

use serde::Serialize;

use crate::application::services::Extraction;

/// Multipart field that carries the PDF.
pub const UPLOAD_FIELD: &str = "file";

/// Links found in an uploaded PDF.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub message: String,
    pub pages: usize,
    /// Unique platform URLs in first-seen order.
    pub urls: Vec<String>,
    #[serde(rename = "textSnippet")]
    pub text_snippet: Option<String>,
}

impl From<Extraction> for ExtractResponse {
    fn from(extraction: Extraction) -> Self {
        Self {
            message: "PDF processed successfully".to_string(),
            pages: extraction.page_count,
            urls: extraction.urls,
            text_snippet: extraction.text_snippet,
        }
    }
}
