//! Wikimark Render
//!
//! This crate turns parsed wikimark lines into a [`RenderedNode`] tree
//! and serializes it as HTML.
//!
//! # Features
//!
//! - **Emphasis tags** - `strong`, `em`, `em class="underline"` and `del`
//! - **Nested spans** - differently-typed pairs inside a span, up to a depth limit
//! - **Horizontal rules** - standalone dash runs as `<hr class="line"/>`
//! - **Opaque spans** - comments and link-target brackets kept as unmatched text
//! - **Escaping** - all source text through `html-escape`, opaque spans included
//!
//! # Example
//!
//! ```
//! use wikimark_render::Renderer;
//!
//! let renderer = Renderer::new();
//! assert_eq!(renderer.render_line_html("*bold*"), "<strong>bold</strong>");
//! assert_eq!(
//!     renderer.render_document("*a*\n~~b~~\n"),
//!     "<strong>a</strong>\n<em>b</em>\n"
//! );
//! ```

pub mod emit;
pub mod node;

pub use emit::Emitter;
pub use node::{push_text, RenderedNode, RULE_HTML};

use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io::Write;

use wikimark_config::{ComputedSyntax, Config};
use wikimark_core::Result;
use wikimark_parser::{Lines, ListPrefix, Parser};

/// A rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLine {
    /// Leading list bullets, handed to the list renderer
    pub list_prefix: Option<ListPrefix>,
    /// Rendered content after the list prefix
    pub nodes: Vec<RenderedNode>,
}

impl RenderedLine {
    /// Count of list-bullet characters at the start of the line.
    pub fn list_prefix_depth(&self) -> u32 {
        self.list_prefix.map_or(0, |p| p.depth)
    }

    /// Serialize the whole line, the list prefix written as literal text.
    pub fn write_html<W: fmt::Write>(&self, out: &mut W, escape: bool) -> fmt::Result {
        if let Some(prefix) = &self.list_prefix {
            out.write_str(&prefix.source())?;
        }
        self.write_content_html(out, escape)
    }

    /// Serialize the content only, leaving the bullets to the list renderer.
    pub fn write_content_html<W: fmt::Write>(&self, out: &mut W, escape: bool) -> fmt::Result {
        for node in &self.nodes {
            node.write_html(out, escape)?;
        }
        Ok(())
    }

    /// The whole line as HTML.
    pub fn to_html(&self, escape: bool) -> String {
        let mut out = String::new();
        let _ = self.write_html(&mut out, escape);
        out
    }

    /// The content as HTML, without the list prefix.
    pub fn content_html(&self, escape: bool) -> String {
        let mut out = String::new();
        let _ = self.write_content_html(&mut out, escape);
        out
    }

    /// Literal text of the content, with all markup stripped.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.push_text(&mut out);
        }
        out
    }
}

/// Line renderer.
///
/// Stateless between lines: each call parses, matches and emits one
/// line from scratch.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    parser: Parser,
}

impl Renderer {
    /// Create a renderer with the default syntax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with resolved syntax settings.
    pub fn with_syntax(syntax: ComputedSyntax) -> Self {
        Self {
            parser: Parser::with_syntax(syntax),
        }
    }

    /// Create a renderer from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_syntax(config.computed_syntax())
    }

    /// The syntax settings in effect.
    pub fn syntax(&self) -> &ComputedSyntax {
        self.parser.syntax()
    }

    /// Whether literal text is escaped on serialization.
    pub fn escape_html(&self) -> bool {
        self.syntax().escape_html
    }

    /// Render one line to a node tree.
    pub fn render_line(&self, line: &str) -> RenderedLine {
        let parsed = self.parser.parse_line(line);
        let nodes = Emitter::new(self.syntax()).emit_tokens(&parsed.tokens);
        RenderedLine {
            list_prefix: parsed.list_prefix,
            nodes,
        }
    }

    /// Render one line to HTML.
    pub fn render_line_html(&self, line: &str) -> String {
        self.render_line(line).to_html(self.escape_html())
    }

    /// Render a document line by line.
    ///
    /// Lines are joined with `\n`; a trailing line terminator in the
    /// input is kept.
    pub fn render_document(&self, text: &str) -> String {
        let escape = self.escape_html();
        let mut out = String::with_capacity(text.len());
        for (i, line) in Lines::new(text).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = self.render_line(line).write_html(&mut out, escape);
        }
        if text.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    /// Render one line as HTML into `writer`, followed by a newline.
    pub fn write_html<W: Write>(&self, line: &str, writer: &mut W) -> Result<()> {
        let mut html = String::new();
        self.render_line(line)
            .write_html(&mut html, self.escape_html())?;
        html.write_char('\n')?;
        writer.write_all(html.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wikimark_config::{FeaturesConfig, SyntaxConfig};

    fn render(line: &str) -> String {
        Renderer::new().render_line_html(line)
    }

    #[test]
    fn test_render_simple() {
        assert_eq!(render("*bold*"), "<strong>bold</strong>");
        assert_eq!(render("~~italic~~"), "<em>italic</em>");
        assert_eq!(
            render("__underline__"),
            r#"<em class="underline">underline</em>"#
        );
        assert_eq!(render("--strike--"), "<del>strike</del>");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(render("*a<b*"), "<strong>a&lt;b</strong>");
        let features = FeaturesConfig {
            escape_html: false,
            ..FeaturesConfig::default()
        };
        let renderer =
            Renderer::with_syntax(ComputedSyntax::from_config(&features, &SyntaxConfig::default()));
        assert_eq!(renderer.render_line_html("*a<b*"), "<strong>a<b</strong>");
    }

    #[test]
    fn test_list_line() {
        let line = Renderer::new().render_line("-- nested *item*");
        assert_eq!(line.list_prefix_depth(), 2);
        assert_eq!(line.to_html(true), "-- nested <strong>item</strong>");
        assert_eq!(line.content_html(true), " nested <strong>item</strong>");
        assert_eq!(line.text(), " nested item");
    }

    #[test]
    fn test_render_document() {
        let renderer = Renderer::new();
        assert_eq!(renderer.render_document(""), "");
        assert_eq!(renderer.render_document("*a*"), "<strong>a</strong>");
        assert_eq!(
            renderer.render_document("*a\nb*\r\n"),
            "*a\nb*\n"
        );
    }

    #[test]
    fn test_write_html() {
        let mut out = Vec::new();
        Renderer::new().write_html("--x--", &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "<del>x</del>\n");
    }

    #[test]
    fn test_text_keeps_opaque_spans() {
        let line = Renderer::new().render_line("a <!-- *c* --> ------ [x>_blank]");
        assert_eq!(line.text(), "a <!-- *c* -->  [x>_blank]");
        assert_eq!(
            line.to_html(true),
            r#"a &lt;!-- *c* --&gt; <hr class="line"/> [x&gt;_blank]"#
        );
    }

    #[test]
    fn test_from_config() {
        let config = Config::parse("[syntax]\nTargets = [\"_top\"]").unwrap();
        let renderer = Renderer::from_config(&config);
        assert_eq!(
            renderer.render_line_html("[a>b>_top] __x"),
            "[a&gt;b&gt;_top] __x"
        );
        assert!(renderer.syntax().is_target("_top"));
    }
}
