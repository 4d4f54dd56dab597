//! Short description text for repositories.

use crate::domain::gateways::MarkdownRenderer;

/// Placeholder used when neither a description nor a README is available.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Number of characters of README text kept in a summary.
pub const README_SUMMARY_CHARS: usize = 250;

/// Derives a short plain-text description.
///
/// # Rules
///
/// 1. A non-empty `description` is rendered to plain text and returned whole
/// 2. Otherwise a non-empty `readme` is rendered to plain text and cut to
///    [`README_SUMMARY_CHARS`] characters, with `...` appended if it was cut
/// 3. Otherwise [`NO_DESCRIPTION`]
///
/// # Examples
///
/// ```ignore
/// let renderer = PulldownRenderer::new();
/// assert_eq!(
///     derive_summary(&renderer, Some("Hello **world**"), None),
///     "Hello world"
/// );
/// ```
pub fn derive_summary(
    renderer: &dyn MarkdownRenderer,
    description: Option<&str>,
    readme: Option<&str>,
) -> String {
    if let Some(description) = description.filter(|d| !d.is_empty()) {
        return renderer.to_plain_text(description);
    }

    match readme.filter(|r| !r.is_empty()) {
        Some(readme) => truncate_chars(&renderer.to_plain_text(readme), README_SUMMARY_CHARS),
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Keeps the first `limit` characters, appending `...` if anything was dropped.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockMarkdownRenderer;
    use crate::infrastructure::markdown::PulldownRenderer;

    #[test]
    fn test_description_is_rendered_and_stripped() {
        let renderer = PulldownRenderer::new();
        assert_eq!(
            derive_summary(&renderer, Some("Hello **world**"), None),
            "Hello world"
        );
    }

    #[test]
    fn test_description_wins_over_readme_and_is_not_capped() {
        let renderer = PulldownRenderer::new();
        let long = "word ".repeat(100);
        let summary = derive_summary(&renderer, Some(&long), Some("# Readme"));
        assert_eq!(summary, long.trim());
        assert!(!summary.ends_with("..."));
    }

    #[test]
    fn test_readme_is_truncated() {
        let renderer = PulldownRenderer::new();
        let readme = "a".repeat(300);

        let summary = derive_summary(&renderer, None, Some(&readme));

        assert_eq!(summary, format!("{}...", "a".repeat(250)));
    }

    #[test]
    fn test_short_readme_is_not_truncated() {
        let renderer = PulldownRenderer::new();
        let summary = derive_summary(&renderer, None, Some("# Title\n\nShort *intro* here"));
        assert_eq!(summary, "Title Short intro here");
    }

    #[test]
    fn test_empty_description_falls_back_to_readme() {
        let renderer = PulldownRenderer::new();
        assert_eq!(
            derive_summary(&renderer, Some(""), Some("From readme")),
            "From readme"
        );
    }

    #[test]
    fn test_placeholder_when_nothing_available() {
        let renderer = PulldownRenderer::new();
        assert_eq!(derive_summary(&renderer, None, None), NO_DESCRIPTION);
        assert_eq!(derive_summary(&renderer, Some(""), Some("")), NO_DESCRIPTION);
    }

    #[test]
    fn test_truncation_applies_to_rendered_text() {
        let mut renderer = MockMarkdownRenderer::new();
        renderer
            .expect_to_plain_text()
            .withf(|md| md == "raw readme")
            .times(1)
            .returning(|_| "x".repeat(251));

        let summary = derive_summary(&renderer, None, Some("raw readme"));

        assert_eq!(summary.len(), 253);
    }

    #[test]
    fn test_truncate_chars_respects_multibyte() {
        let text = "é".repeat(260);
        let cut = truncate_chars(&text, 250);
        assert_eq!(cut.chars().count(), 253);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_chars_exact_length() {
        let text = "b".repeat(250);
        assert_eq!(truncate_chars(&text, 250), text);
    }
}
