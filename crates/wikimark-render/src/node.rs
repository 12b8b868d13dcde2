//! Rendered output tree.

use serde::Serialize;
use std::fmt::{self, Write};

/// Markup emitted for a horizontal rule.
pub const RULE_HTML: &str = r#"<hr class="line"/>"#;

/// One node of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RenderedNode {
    /// Literal text, escaped on serialization when escaping is on
    Text(String),

    /// An element wrapping its children
    Tag {
        /// Element name
        name: &'static str,
        /// Value of the `class` attribute
        class: Option<&'static str>,
        /// Child nodes
        children: Vec<RenderedNode>,
    },

    /// Generated markup, never escaped
    RawHtml(String),
}

impl RenderedNode {
    /// Serialize to HTML, appending to `out`.
    pub fn write_html<W: Write>(&self, out: &mut W, escape: bool) -> fmt::Result {
        match self {
            RenderedNode::Text(text) if escape => {
                out.write_str(&html_escape::encode_text(text))
            }
            RenderedNode::Text(text) | RenderedNode::RawHtml(text) => out.write_str(text),
            RenderedNode::Tag {
                name,
                class,
                children,
            } => {
                write!(out, "<{}", name)?;
                if let Some(class) = class {
                    write!(
                        out,
                        " class=\"{}\"",
                        html_escape::encode_double_quoted_attribute(class)
                    )?;
                }
                out.write_char('>')?;
                for child in children {
                    child.write_html(out, escape)?;
                }
                write!(out, "</{}>", name)
            }
        }
    }

    /// Serialize to an HTML string.
    pub fn to_html(&self, escape: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_html(&mut out, escape);
        out
    }

    /// Append the literal text of this node, without markup.
    pub fn push_text(&self, out: &mut String) {
        match self {
            RenderedNode::Text(text) => out.push_str(text),
            RenderedNode::Tag { children, .. } => {
                for child in children {
                    child.push_text(out);
                }
            }
            RenderedNode::RawHtml(_) => {}
        }
    }
}

/// Append `text` to `nodes`, merging with a trailing text node.
pub fn push_text(nodes: &mut Vec<RenderedNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(RenderedNode::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(RenderedNode::Text(text.to_string()));
    }
}
