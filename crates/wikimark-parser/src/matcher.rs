//! Delimiter pair matcher.
//!
//! A single left-to-right pass over one line's tokens, holding at most one
//! pending opener per delimiter type. Runs are never rescanned, so
//! adversarial input with hundreds of unmatched markers stays linear.
//!
//! Only one span is open at a time. Differently-typed pairs inside it are
//! resolved later, by matching the closed span's content again with its
//! own type excluded.

use log::trace;
use wikimark_core::{DelimiterSet, DelimiterType};

use crate::tokenizer::{DelimiterRun, Token};

/// A run waiting for its closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOpen {
    /// Type of the opening run
    pub kind: DelimiterType,
    /// Raw characters in the opening run
    pub run_len: usize,
    /// Byte offset just past the opening run
    pub offset_after_run: usize,
    /// Index of the first content token
    pub content_start: usize,
}

/// One pending-opener slot per delimiter type.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenSlots {
    slots: [Option<PendingOpen>; DelimiterType::COUNT],
}

impl OpenSlots {
    /// Empty slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pending` in its type's slot.
    pub fn open(&mut self, pending: PendingOpen) {
        debug_assert!(self.live().is_none(), "a span is already open");
        self.slots[pending.kind.index()] = Some(pending);
    }

    /// Clear and return the slot for `kind`.
    pub fn take(&mut self, kind: DelimiterType) -> Option<PendingOpen> {
        self.slots[kind.index()].take()
    }

    /// The opener currently collecting content, if any.
    pub fn live(&self) -> Option<PendingOpen> {
        debug_assert!(self.slots.iter().filter(|s| s.is_some()).count() <= 1);
        self.slots.iter().flatten().next().copied()
    }
}

/// A closed delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedSpan<'t> {
    /// Delimiter type of the pair
    pub kind: DelimiterType,
    /// Tokens between the opener and the closer
    pub content: &'t [Token],
    /// Raw opener characters beyond the consumed unit, literal after the opening edge
    pub leftover_open: usize,
    /// Raw closer characters beyond the consumed unit, literal before the closing edge
    pub leftover_close: usize,
}

impl MatchedSpan<'_> {
    /// Leftover opener characters as source text.
    pub fn open_text(&self) -> String {
        crate::tokenizer::repeat_char(self.kind.char(), self.leftover_open)
    }

    /// Leftover closer characters as source text.
    pub fn close_text(&self) -> String {
        crate::tokenizer::repeat_char(self.kind.char(), self.leftover_close)
    }
}

/// Output of the matcher, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matched<'t> {
    /// A token passed through as-is; delimiter runs here are literal
    Inert(&'t Token),
    /// A closed pair
    Span(MatchedSpan<'t>),
}

/// Match delimiter pairs in `tokens`, treating `excluded` types as literal.
///
/// # Example
///
/// ```
/// use wikimark_core::DelimiterSet;
/// use wikimark_parser::{match_tokens, Matched, Tokenizer};
///
/// let tokens = Tokenizer::new().tokenize("*Eeny*meeny*miny*moe*");
/// let spans = match_tokens(&tokens, DelimiterSet::empty())
///     .iter()
///     .filter(|m| matches!(m, Matched::Span(_)))
///     .count();
/// assert_eq!(spans, 2);
/// ```
pub fn match_tokens(tokens: &[Token], excluded: DelimiterSet) -> Vec<Matched<'_>> {
    let mut out = Vec::with_capacity(tokens.len());
    match_into(tokens, excluded, &mut out);
    out
}

/// Like [`match_tokens`], appending to `out`.
///
/// An opener still pending at the end of the slice becomes literal and
/// its content is matched again with that type excluded. Each restart
/// excludes one more type, so there are at most four.
pub fn match_into<'t>(tokens: &'t [Token], excluded: DelimiterSet, out: &mut Vec<Matched<'t>>) {
    let mut excluded = excluded;
    let mut start = 0;

    loop {
        let mut slots = OpenSlots::new();

        for i in start..tokens.len() {
            let run = match &tokens[i] {
                Token::Delimiter(run) if !excluded.contains(run.kind) => *run,
                token => {
                    if slots.live().is_none() {
                        out.push(Matched::Inert(token));
                    }
                    continue;
                }
            };

            match slots.live() {
                Some(open) if open.kind == run.kind => {
                    if can_close(tokens, &open, i) {
                        slots.take(run.kind);
                        let width = run.kind.unit_width();
                        out.push(Matched::Span(MatchedSpan {
                            kind: run.kind,
                            content: &tokens[open.content_start..i],
                            leftover_open: open.run_len - width,
                            leftover_close: run.raw_len - width,
                        }));
                    }
                }
                // Content of the live span
                Some(_) => {}
                None => {
                    if can_open(tokens, i) {
                        slots.open(PendingOpen {
                            kind: run.kind,
                            run_len: run.raw_len,
                            offset_after_run: run.end(),
                            content_start: i + 1,
                        });
                    } else if run.units() >= 3 {
                        out.push(Matched::Span(self_contained(&run)));
                    } else {
                        out.push(Matched::Inert(&tokens[i]));
                    }
                }
            }
        }

        let Some(open) = slots.live() else {
            break;
        };
        trace!(
            "unclosed {} opener ending at byte {}, rematching without it",
            open.kind,
            open.offset_after_run
        );
        out.push(Matched::Inert(&tokens[open.content_start - 1]));
        excluded = excluded.with(open.kind);
        start = open.content_start;
    }
}

/// A run opens when the next character exists and is not whitespace.
fn can_open(tokens: &[Token], i: usize) -> bool {
    tokens
        .get(i + 1)
        .and_then(Token::first_char)
        .is_some_and(|c| !c.is_whitespace())
}

/// A run closes `open` when the span has content and the character
/// before the run is not whitespace.
fn can_close(tokens: &[Token], open: &PendingOpen, i: usize) -> bool {
    let width = open.kind.unit_width();
    let prev = if i > open.content_start {
        tokens[i - 1].last_char()
    } else if open.run_len > width {
        Some(open.kind.char())
    } else {
        None
    };
    prev.is_some_and(|c| !c.is_whitespace())
}

/// A run of three or more units that cannot open wraps its own middle.
///
/// `***` is one unit opening, one closing, and a literal `*` between.
fn self_contained(run: &DelimiterRun) -> MatchedSpan<'static> {
    MatchedSpan {
        kind: run.kind,
        content: &[],
        leftover_open: run.raw_len - 2 * run.kind.unit_width(),
        leftover_close: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{source_text, Tokenizer};

    /// Render matches as bracketed source text, recursing like the emitter does.
    fn show(line: &str) -> String {
        let tokens = Tokenizer::new().tokenize(line);
        let mut out = String::new();
        write_matches(
            &match_tokens(&tokens, DelimiterSet::empty()),
            DelimiterSet::empty(),
            &mut out,
        );
        out
    }

    fn write_matches(matches: &[Matched<'_>], excluded: DelimiterSet, out: &mut String) {
        for m in matches {
            match m {
                Matched::Inert(token) => token.push_source(out),
                Matched::Span(span) => {
                    let inner = excluded.with(span.kind);
                    out.push('<');
                    out.push_str(span.kind.tag());
                    out.push('>');
                    out.push_str(&span.open_text());
                    write_matches(&match_tokens(span.content, inner), inner, out);
                    out.push_str(&span.close_text());
                    out.push_str("</");
                    out.push_str(span.kind.tag());
                    out.push('>');
                }
            }
        }
    }

    #[test]
    fn test_simple_pair() {
        assert_eq!(show("*bold*"), "<strong>bold</strong>");
        assert_eq!(show("a --b-- c"), "a <del>b</del> c");
    }

    #[test]
    fn test_whitespace_gating() {
        assert_eq!(show("* bold *"), "* bold *");
        assert_eq!(show("*bold *"), "*bold *");
        assert_eq!(show("* bold*"), "* bold*");
    }

    #[test]
    fn test_excess_characters_inside() {
        assert_eq!(show("**inside**"), "<strong>*inside*</strong>");
        assert_eq!(show("~~~x~~~"), "<em>~x~</em>");
    }

    #[test]
    fn test_alternating() {
        assert_eq!(
            show("*Eeny*meeny*miny*moe*"),
            "<strong>Eeny</strong>meeny<strong>miny</strong>moe*"
        );
    }

    #[test]
    fn test_self_contained_runs() {
        assert_eq!(show("star: *** "), "star: <strong>*</strong> ");
        assert_eq!(show("**** "), "<strong>**</strong> ");
        assert_eq!(show("** x"), "** x");
    }

    #[test]
    fn test_long_run_inside_live_span_is_content() {
        // Runs of the live type never self-close, and stay literal after an unwind
        assert_eq!(show("a *** b"), "a <strong>*</strong> b");
        assert_eq!(show("*a *** b"), "*a *** b");
        assert_eq!(show("*a *** b*"), "<strong>a *** b</strong>");
        assert_eq!(show("~~a *** b"), "~~a <strong>*</strong> b");
    }

    #[test]
    fn test_trailing_unmatched() {
        assert_eq!(
            show("This is *a* short bold*"),
            "This is <strong>a</strong> short bold*"
        );
    }

    #[test]
    fn test_interior_run_failing_close_stays_inside() {
        assert_eq!(show("*a *b* c*"), "<strong>a *b</strong> c*");
    }

    #[test]
    fn test_nested_other_type() {
        assert_eq!(show("~~*both*~~"), "<em><strong>both</strong></em>");
    }

    #[test]
    fn test_unwound_opener_rematches_content() {
        assert_eq!(show("*a __b__"), "*a <em>b</em>");
        assert_eq!(show("abc *abc *abc *"), "abc *abc *abc *");
    }

    #[test]
    fn test_excluded_types_are_literal() {
        let tokens = Tokenizer::new().tokenize("*a*");
        let matched = match_tokens(&tokens, DelimiterSet::empty().with(DelimiterType::Bold));
        assert_eq!(matched.len(), 3);
        assert!(matched.iter().all(|m| matches!(m, Matched::Inert(_))));
    }

    #[test]
    fn test_span_content_slices_tokens() {
        let tokens = Tokenizer::new().tokenize("x *a b* y");
        let matched = match_tokens(&tokens, DelimiterSet::empty());
        let span = matched
            .iter()
            .find_map(|m| match m {
                Matched::Span(s) => Some(*s),
                Matched::Inert(_) => None,
            })
            .unwrap();
        assert_eq!(span.kind, DelimiterType::Bold);
        assert_eq!(source_text(span.content), "a b");
        assert_eq!(span.leftover_open, 0);
        assert_eq!(span.leftover_close, 0);
    }

    #[test]
    fn test_every_token_accounted_for() {
        let line = "*a ~~b* __c";
        let tokens = Tokenizer::new().tokenize(line);
        let mut out = String::new();
        write_matches(
            &match_tokens(&tokens, DelimiterSet::empty()),
            DelimiterSet::empty(),
            &mut out,
        );
        let stripped = out.replace("<strong>", "*").replace("</strong>", "*");
        assert_eq!(stripped, line);
    }

    #[test]
    fn test_open_slots() {
        let mut slots = OpenSlots::new();
        assert!(slots.live().is_none());
        let pending = PendingOpen {
            kind: DelimiterType::Strike,
            run_len: 2,
            offset_after_run: 2,
            content_start: 1,
        };
        slots.open(pending);
        assert_eq!(slots.live(), Some(pending));
        assert_eq!(slots.take(DelimiterType::Bold), None);
        assert_eq!(slots.take(DelimiterType::Strike), Some(pending));
        assert!(slots.live().is_none());
    }

    #[test]
    fn test_linear_on_adversarial_input() {
        let line = "abc *".repeat(5000);
        let tokens = Tokenizer::new().tokenize(&line);
        let matched = match_tokens(&tokens, DelimiterSet::empty());
        assert!(matched.iter().all(|m| matches!(m, Matched::Inert(_))));
        assert_eq!(matched.len(), tokens.len());
    }
}
