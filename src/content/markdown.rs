//! Markdown rendering

use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown bodies to HTML.
///
/// The output is inserted into pages without further sanitization, so raw
/// HTML embedded in the markdown source is escaped here rather than passed
/// through. Rendering is a pure transformation of the input text.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render markdown to HTML, escaping any embedded raw HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        // Re-emitting raw HTML events as text makes push_html escape them,
        // which keeps <script> and friends from reaching the page verbatim.
        let events = parser.map(|event| match event {
            Event::Html(raw) => Event::Text(raw),
            Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, events);
        out
    }
}
