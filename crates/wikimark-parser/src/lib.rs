//! Wikimark Parser
//!
//! The inline delimiter engine for wikimark: it turns one line of wiki
//! text into tokens and matched delimiter pairs.
//!
//! # Overview
//!
//! Each line flows through the same pipeline, with no state carried
//! from one line to the next:
//!
//! 1. [`OpaqueDetector`] lifts out comments and link-target brackets
//! 2. [`consume_list_prefix`] removes a leading list bullet run
//! 3. [`Tokenizer`] splits the rest into literals and delimiter runs
//! 4. [`intercept_rules`] turns standalone dash runs into rules
//! 5. [`match_tokens`] pairs delimiters in a single linear pass
//!
//! # Example
//!
//! ```
//! use wikimark_parser::{Matched, Parser};
//!
//! let parser = Parser::new();
//! let line = parser.parse_line("-- item with *bold*");
//! assert_eq!(line.list_prefix_depth(), 2);
//!
//! let spans = line
//!     .matched()
//!     .into_iter()
//!     .filter(|m| matches!(m, Matched::Span(_)))
//!     .count();
//! assert_eq!(spans, 1);
//! ```

pub mod lines;
pub mod list;
pub mod matcher;
pub mod opaque;
pub mod rule;
pub mod tokenizer;

pub use lines::Lines;
pub use list::{consume_list_prefix, ListPrefix};
pub use matcher::{match_into, match_tokens, Matched, MatchedSpan, OpenSlots, PendingOpen};
pub use opaque::{OpaqueDetector, Segment};
pub use rule::intercept_rules;
pub use tokenizer::{source_text, DelimiterRun, OpaqueSpan, Token, Tokenizer};

use wikimark_config::ComputedSyntax;
use wikimark_core::DelimiterSet;

/// One line after tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Leading list bullets, when present
    pub list_prefix: Option<ListPrefix>,
    /// Tokens after the list prefix
    pub tokens: Vec<Token>,
}

impl ParsedLine {
    /// Count of consumed list-bullet characters, 0 when not a list item.
    pub fn list_prefix_depth(&self) -> u32 {
        self.list_prefix.map_or(0, |p| p.depth)
    }

    /// Match delimiter pairs over the line's tokens.
    pub fn matched(&self) -> Vec<Matched<'_>> {
        match_tokens(&self.tokens, DelimiterSet::empty())
    }

    /// Source text of the line, list prefix included.
    pub fn source(&self) -> String {
        let mut out = self.list_prefix.map(|p| p.source()).unwrap_or_default();
        out.push_str(&source_text(&self.tokens));
        out
    }
}

/// Per-line parser.
///
/// Holds only configuration, so one parser can serve any number of
/// lines and documents.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    syntax: ComputedSyntax,
    tokenizer: Tokenizer,
}

impl Parser {
    /// Create a parser with the default syntax.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with resolved configuration.
    pub fn with_syntax(syntax: ComputedSyntax) -> Self {
        Self {
            syntax,
            tokenizer: Tokenizer::new(),
        }
    }

    /// The syntax settings in effect.
    pub fn syntax(&self) -> &ComputedSyntax {
        &self.syntax
    }

    /// Tokenize one line.
    ///
    /// `line` must not contain a line terminator; use [`Lines`] to split
    /// documents.
    pub fn parse_line(&self, line: &str) -> ParsedLine {
        let syntax = &self.syntax;
        let segments = OpaqueDetector::new(syntax).split(line);

        let list_prefix = if syntax.list_prefixes {
            consume_list_prefix(line, syntax.horizontal_rules.then_some(syntax.rule_min_dashes))
        } else {
            None
        };
        let skip = list_prefix.map_or(0, |p| p.len());

        let mut tokens = Vec::new();
        for segment in segments {
            match segment {
                Segment::Text { text, offset } if offset == 0 && skip > 0 => {
                    let skip = skip.min(text.len());
                    self.tokenizer.scan(&text[skip..], skip, &mut tokens);
                }
                Segment::Text { text, offset } => self.tokenizer.scan(text, offset, &mut tokens),
                Segment::Opaque(span) => tokens.push(Token::Opaque(span)),
            }
        }

        if syntax.horizontal_rules {
            intercept_rules(&mut tokens, syntax.rule_min_dashes);
        }

        ParsedLine {
            list_prefix,
            tokens,
        }
    }
}
