//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Renders document bodies and excerpts to HTML
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front-matter is stripped before rendering, so YAML metadata
        // blocks stay disabled here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION;
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }

    /// Extract the excerpt source from a body: everything before
    /// `<!-- more -->`, falling back to the first paragraph.
    pub fn split_excerpt(content: &str) -> &str {
        if let Some(pos) = content.find("<!-- more -->") {
            content[..pos].trim()
        } else {
            content.trim().split("\n\n").next().unwrap_or("").trim()
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
