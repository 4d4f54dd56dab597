//! Markdown rendering backed by `pulldown-cmark`.

pub mod pulldown_renderer;

pub use pulldown_renderer::PulldownRenderer;
