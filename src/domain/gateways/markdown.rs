//! Markdown rendering seam.

/// Renders markdown for display and for plain-text summaries.
#[cfg_attr(test, mockall::automock)]
pub trait MarkdownRenderer: Send + Sync {
    /// Renders markdown to HTML that is safe to embed: raw HTML in the source
    /// is escaped, not passed through.
    fn to_html(&self, markdown: &str) -> String;

    /// Renders markdown and reduces it to plain text with all tags removed,
    /// whitespace runs collapsed to one space, and the ends trimmed.
    fn to_plain_text(&self, markdown: &str) -> String;
}
