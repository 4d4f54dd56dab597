//! [`MarkdownRenderer`] implementation using `pulldown-cmark`.

use std::sync::LazyLock;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};
use regex::Regex;

use crate::domain::gateways::MarkdownRenderer;

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// URL schemes that must never reach an `href` or `src` attribute.
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// GitHub-flavoured markdown renderer.
///
/// Enables tables, strikethrough, task lists, and footnotes, which covers what
/// typical READMEs use.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownRenderer;

impl PulldownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_FOOTNOTES
    }

    fn render(markdown: &str, sanitize: bool) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let mut output = String::with_capacity(markdown.len() * 3 / 2);

        if sanitize {
            html::push_html(&mut output, parser.map(sanitize_event));
        } else {
            html::push_html(&mut output, parser);
        }

        output
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn to_html(&self, markdown: &str) -> String {
        Self::render(markdown, true)
    }

    fn to_plain_text(&self, markdown: &str) -> String {
        strip_markup(&Self::render(markdown, false))
    }
}

/// Turns raw HTML into text and neutralises script-capable link targets.
fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lowered = url.trim_start().to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        CowStr::Borrowed("")
    } else {
        url
    }
}

/// Replaces every tag with a space, collapses whitespace runs, and trims.
fn strip_markup(html: &str) -> String {
    let text = TAG_REGEX.replace_all(html, " ");
    WHITESPACE_RUN_REGEX
        .replace_all(&text, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_emphasis() {
        let renderer = PulldownRenderer::new();
        assert_eq!(renderer.to_plain_text("Hello **world**"), "Hello world");
    }

    #[test]
    fn test_plain_text_collapses_blocks() {
        let renderer = PulldownRenderer::new();
        let text = renderer.to_plain_text("# Heading\n\n- one\n- two\n\nParagraph");
        assert_eq!(text, "Heading one two Paragraph");
    }

    #[test]
    fn test_plain_text_strips_raw_html() {
        let renderer = PulldownRenderer::new();
        let text = renderer.to_plain_text("<div align=\"center\">Centered</div>");
        assert_eq!(text, "Centered");
    }

    #[test]
    fn test_html_renders_markdown() {
        let renderer = PulldownRenderer::new();
        assert_eq!(
            renderer.to_html("Hello **world**"),
            "<p>Hello <strong>world</strong></p>\n"
        );
    }

    #[test]
    fn test_html_escapes_raw_html() {
        let renderer = PulldownRenderer::new();
        let html = renderer.to_html("before <script>alert(1)</script> after");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_drops_javascript_links() {
        let renderer = PulldownRenderer::new();
        let html = renderer.to_html("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click"));
    }

    #[test]
    fn test_html_keeps_regular_links() {
        let renderer = PulldownRenderer::new();
        let html = renderer.to_html("[site](https://example.com)");
        assert!(html.contains("href=\"https://example.com\""));
    }

    #[test]
    fn test_html_renders_tables() {
        let renderer = PulldownRenderer::new();
        let html = renderer.to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
