//! [`PdfLinkReader`] implementation using `lopdf`.

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::debug;

use crate::domain::gateways::{PdfContents, PdfError, PdfLinkReader};

/// Reads link annotations with the pure-Rust `lopdf` parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfLinkReader;

impl LopdfLinkReader {
    pub fn new() -> Self {
        Self
    }
}

impl PdfLinkReader for LopdfLinkReader {
    fn read(&self, bytes: &[u8]) -> Result<PdfContents, PdfError> {
        let doc = Document::load_mem(bytes).map_err(classify_load_error)?;

        // Loading succeeds without a password but leaves only the /Encrypt
        // dictionary parsed; a decryption state exists only for empty user passwords.
        if doc.is_encrypted() && doc.encryption_state.is_none() {
            return Err(PdfError::Encrypted);
        }

        // BTreeMap keyed by 1-based page number, so iteration is in page order.
        let pages = doc.get_pages();

        let mut link_uris = Vec::new();
        for (page_number, page_id) in &pages {
            let uris = page_link_uris(&doc, *page_id);
            debug!(page = page_number, links = uris.len(), "Read page annotations");
            link_uris.extend(uris);
        }

        let page_numbers: Vec<u32> = pages.keys().copied().collect();
        let text = if page_numbers.is_empty() {
            None
        } else {
            doc.extract_text(&page_numbers)
                .ok()
                .filter(|text| !text.trim().is_empty())
        };

        Ok(PdfContents {
            page_count: pages.len(),
            link_uris,
            text,
        })
    }
}

fn classify_load_error(err: lopdf::Error) -> PdfError {
    match err {
        lopdf::Error::Decryption(_) => PdfError::Encrypted,
        other => PdfError::Unreadable(other.to_string()),
    }
}

/// URIs of the link annotations on one page, in annotation order.
///
/// Malformed annotation entries are skipped rather than failing the page.
fn page_link_uris(doc: &Document, page_id: ObjectId) -> Vec<String> {
    let Ok(page) = doc.get_dictionary(page_id) else {
        return Vec::new();
    };

    let annots = page
        .get(b"Annots")
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_array());

    match annots {
        Ok(annots) => annots
            .iter()
            .filter_map(|annot| {
                let dict = resolve(doc, annot).ok()?.as_dict().ok()?;
                link_uri(doc, dict)
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Returns the URI of a `/Subtype /Link` annotation with a `/URI` action.
fn link_uri(doc: &Document, annot: &Dictionary) -> Option<String> {
    if annot.get(b"Subtype").ok()?.as_name().ok()? != b"Link" {
        return None;
    }

    let action = resolve(doc, annot.get(b"A").ok()?).ok()?.as_dict().ok()?;
    if action.get(b"S").ok()?.as_name().ok()? != b"URI" {
        return None;
    }

    let raw = resolve(doc, action.get(b"URI").ok()?).ok()?.as_str().ok()?;
    let uri = String::from_utf8_lossy(raw).trim().to_string();

    (!uri.is_empty()).then_some(uri)
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> lopdf::Result<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_unreadable() {
        let result = LopdfLinkReader::new().read(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Unreadable(_))));
    }

    #[test]
    fn test_empty_input_is_unreadable() {
        let result = LopdfLinkReader::new().read(&[]);
        assert!(result.is_err());
    }
}
