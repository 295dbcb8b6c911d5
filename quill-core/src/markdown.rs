//! Markdown rendering via pulldown-cmark.

use pulldown_cmark::{html, Options, Parser};

/// Renders raw article bodies to HTML.
///
/// Rendering is a pure function of the input bytes; the renderer holds
/// only the enabled extension set.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);

        Self { options }
    }

    /// Convert raw markdown bytes to an HTML string. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn render(&self, raw: &[u8]) -> String {
        let text = String::from_utf8_lossy(raw);
        let parser = Parser::new_ext(&text, self.options);

        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = MarkdownRenderer::new().render(b"# Hi\n\nSome *markdown*.\n");
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<em>markdown</em>"));
    }

    #[test]
    fn test_tables_are_enabled() {
        let html = MarkdownRenderer::new().render(b"| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_strikethrough_is_enabled() {
        let html = MarkdownRenderer::new().render(b"~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_empty_body_renders_empty() {
        assert!(MarkdownRenderer::new().render(b"").is_empty());
    }
}
