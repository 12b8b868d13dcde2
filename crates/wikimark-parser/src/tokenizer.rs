//! Tokenizer for inline wiki content.
//!
//! This module provides the token model and the delimiter scanner,
//! breaking text into literal runs and maximal same-character
//! delimiter runs.

use wikimark_core::{DelimiterType, OpaqueKind, Span};

/// A maximal run of one trigger character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterRun {
    /// Delimiter family of the run's character
    pub kind: DelimiterType,
    /// Raw character count (not units)
    pub raw_len: usize,
    /// Byte offset of the first character within the line
    pub offset: usize,
}

impl DelimiterRun {
    /// Create a run.
    pub fn new(kind: DelimiterType, raw_len: usize, offset: usize) -> Self {
        Self {
            kind,
            raw_len,
            offset,
        }
    }

    /// Run length in logical marker units.
    ///
    /// `~~~` is one unit, `****` is four.
    pub fn units(&self) -> usize {
        self.raw_len / self.kind.unit_width()
    }

    /// Byte offset just past the run.
    pub fn end(&self) -> usize {
        self.offset + self.raw_len
    }

    /// The run's source characters.
    pub fn raw(&self) -> String {
        repeat_char(self.kind.char(), self.raw_len)
    }
}

/// A region never rescanned for delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueSpan {
    /// What kind of region this is
    pub kind: OpaqueKind,
    /// Source text, verbatim
    pub text: String,
    /// Location within the line
    pub span: Span,
}

/// Token types for inline wiki content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain text content, never empty
    Literal(String),

    /// Candidate opener or closer
    Delimiter(DelimiterRun),

    /// HTML comment or link-target bracket
    Opaque(OpaqueSpan),

    /// Standalone dash run turned into a horizontal rule
    Rule(DelimiterRun),
}

impl Token {
    /// First source character of the token.
    pub fn first_char(&self) -> Option<char> {
        match self {
            Token::Literal(s) => s.chars().next(),
            Token::Delimiter(run) | Token::Rule(run) => Some(run.kind.char()),
            Token::Opaque(span) => span.text.chars().next(),
        }
    }

    /// Last source character of the token.
    pub fn last_char(&self) -> Option<char> {
        match self {
            Token::Literal(s) => s.chars().next_back(),
            Token::Delimiter(run) | Token::Rule(run) => Some(run.kind.char()),
            Token::Opaque(span) => span.text.chars().next_back(),
        }
    }

    /// Append the token's source text to `out`.
    pub fn push_source(&self, out: &mut String) {
        match self {
            Token::Literal(s) => out.push_str(s),
            Token::Delimiter(run) | Token::Rule(run) => {
                out.extend(std::iter::repeat(run.kind.char()).take(run.raw_len))
            }
            Token::Opaque(span) => out.push_str(&span.text),
        }
    }

    /// Check if this token is a delimiter candidate.
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::Delimiter(_))
    }
}

/// Rebuild the source text of a token sequence.
pub fn source_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.push_source(&mut out);
    }
    out
}

/// `c` repeated `n` times.
pub fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

/// Delimiter scanner.
///
/// Works byte-wise: every trigger character is ASCII, so run
/// boundaries always fall on UTF-8 character boundaries.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a line with no opaque spans or list prefix.
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.scan(line, 0, &mut tokens);
        tokens
    }

    /// Scan `text`, which starts at byte `base` of its line, appending
    /// literal and delimiter tokens to `tokens`.
    ///
    /// A run shorter than one marker unit (a lone `~`, `_` or `-`)
    /// stays in the surrounding literal.
    pub fn scan(&self, text: &str, base: usize, tokens: &mut Vec<Token>) {
        let bytes = text.as_bytes();
        let mut literal_start = 0;
        let mut i = 0;

        while i < bytes.len() {
            let Some(kind) = DelimiterType::from_char(bytes[i] as char) else {
                i += 1;
                continue;
            };
            let start = i;
            while i < bytes.len() && bytes[i] == bytes[start] {
                i += 1;
            }
            let raw_len = i - start;
            if raw_len < kind.unit_width() {
                continue;
            }

            if start > literal_start {
                tokens.push(Token::Literal(text[literal_start..start].to_string()));
            }
            tokens.push(Token::Delimiter(DelimiterRun::new(kind, raw_len, base + start)));
            literal_start = i;
        }

        if literal_start < bytes.len() {
            tokens.push(Token::Literal(text[literal_start..].to_string()));
        }
    }
}
