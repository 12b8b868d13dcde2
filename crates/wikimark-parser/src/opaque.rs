//! Opaque span detection.
//!
//! HTML comments and link-target brackets are lifted out of a line
//! before delimiter scanning, so their punctuation (`--` in a comment,
//! `__` in a `_blank` target) is never taken for emphasis.

use regex::Regex;
use std::sync::LazyLock;

use wikimark_config::ComputedSyntax;
use wikimark_core::{OpaqueKind, Span};

use crate::tokenizer::OpaqueSpan;

/// Regex for HTML comments, up to the first `-->`.
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Regex for a bracket holding a `>`-separated reference: `[label>ref>target]`.
///
/// The content excludes brackets, so the innermost `[` before a `]` wins.
static LINK_TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*>[^\[\]]*)\]").unwrap());

/// A piece of a line after opaque detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text still eligible for delimiter scanning
    Text {
        /// The text itself
        text: &'a str,
        /// Byte offset within the line
        offset: usize,
    },
    /// An inert region
    Opaque(OpaqueSpan),
}

/// Finds opaque spans in a line.
///
/// Unterminated comments and brackets without a recognized target
/// are left as ordinary text.
#[derive(Debug, Clone)]
pub struct OpaqueDetector<'s> {
    syntax: &'s ComputedSyntax,
}

impl<'s> OpaqueDetector<'s> {
    /// Create a detector using the comment and link-target settings of `syntax`.
    pub fn new(syntax: &'s ComputedSyntax) -> Self {
        Self { syntax }
    }

    /// Find the non-overlapping opaque spans of `line`, in order.
    pub fn find(&self, line: &str) -> Vec<OpaqueSpan> {
        let mut extractions: Vec<OpaqueSpan> = Vec::new();

        if self.syntax.comments && line.contains("<!--") {
            for m in COMMENT_RE.find_iter(line) {
                extractions.push(OpaqueSpan {
                    kind: OpaqueKind::Comment,
                    text: m.as_str().to_string(),
                    span: Span::new(m.start(), m.end()),
                });
            }
        }

        if self.syntax.link_targets && line.contains('[') {
            for cap in LINK_TARGET_RE.captures_iter(line) {
                let (Some(m), Some(content)) = (cap.get(0), cap.get(1)) else {
                    continue;
                };
                let target = content.as_str().rsplit('>').next().unwrap_or("");
                if !self.syntax.is_target(target) {
                    continue;
                }
                extractions.push(OpaqueSpan {
                    kind: OpaqueKind::LinkTarget,
                    text: m.as_str().to_string(),
                    span: Span::new(m.start(), m.end()),
                });
            }
        }

        // Sort by start position and keep the first of any overlap
        extractions.sort_by_key(|e| e.span.start);
        let mut filtered: Vec<OpaqueSpan> = Vec::with_capacity(extractions.len());
        for ext in extractions {
            match filtered.last() {
                Some(last) if last.span.overlaps(&ext.span) => {}
                _ => filtered.push(ext),
            }
        }
        filtered
    }

    /// Split `line` into scannable text and opaque segments.
    pub fn split<'a>(&self, line: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for span in self.find(line) {
            if span.span.start > last_end {
                segments.push(Segment::Text {
                    text: &line[last_end..span.span.start],
                    offset: last_end,
                });
            }
            last_end = span.span.end;
            segments.push(Segment::Opaque(span));
        }

        if last_end < line.len() {
            segments.push(Segment::Text {
                text: &line[last_end..],
                offset: last_end,
            });
        }
        segments
    }
}
