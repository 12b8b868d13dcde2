//! Span emitter.
//!
//! Turns matcher output into [`RenderedNode`]s. A closed span's content
//! is matched again with the span's own type excluded, which resolves
//! differently-typed pairs nested inside it.

use wikimark_config::ComputedSyntax;
use wikimark_core::DelimiterSet;
use wikimark_parser::{match_tokens, Matched, MatchedSpan, Token};

use crate::node::{push_text, RenderedNode, RULE_HTML};

/// Emits rendered nodes for matched tokens.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'s> {
    syntax: &'s ComputedSyntax,
}

impl<'s> Emitter<'s> {
    /// Create an emitter honoring the nesting limit of `syntax`.
    pub fn new(syntax: &'s ComputedSyntax) -> Self {
        Self { syntax }
    }

    /// Match and emit a whole token sequence.
    pub fn emit_tokens(&self, tokens: &[Token]) -> Vec<RenderedNode> {
        let mut nodes = Vec::new();
        let matched = match_tokens(tokens, DelimiterSet::empty());
        self.emit(&matched, DelimiterSet::empty(), 0, &mut nodes);
        nodes
    }

    /// Emit `matched`, which sits inside `depth` enclosing spans whose
    /// types are in `excluded`.
    pub fn emit(
        &self,
        matched: &[Matched<'_>],
        excluded: DelimiterSet,
        depth: usize,
        out: &mut Vec<RenderedNode>,
    ) {
        for m in matched {
            match m {
                Matched::Inert(token) => emit_inert(token, out),
                Matched::Span(span) => out.push(self.emit_span(span, excluded, depth + 1)),
            }
        }
    }

    fn emit_span(
        &self,
        span: &MatchedSpan<'_>,
        excluded: DelimiterSet,
        depth: usize,
    ) -> RenderedNode {
        let mut children = Vec::new();
        push_text(&mut children, &span.open_text());

        if depth < self.syntax.max_nesting {
            let inner = excluded.with(span.kind);
            let matched = match_tokens(span.content, inner);
            self.emit(&matched, inner, depth, &mut children);
        } else {
            for token in span.content {
                emit_inert(token, &mut children);
            }
        }

        push_text(&mut children, &span.close_text());
        RenderedNode::Tag {
            name: span.kind.tag(),
            class: span.kind.class(),
            children,
        }
    }
}

fn emit_inert(token: &Token, out: &mut Vec<RenderedNode>) {
    match token {
        Token::Literal(text) => push_text(out, text),
        Token::Delimiter(run) => push_text(out, &run.raw()),
        Token::Opaque(span) => push_text(out, &span.text),
        Token::Rule(_) => out.push(RenderedNode::RawHtml(RULE_HTML.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wikimark_config::{FeaturesConfig, SyntaxConfig};
    use wikimark_parser::Parser;

    fn html(syntax: &ComputedSyntax, line: &str) -> String {
        let parsed = Parser::with_syntax(syntax.clone()).parse_line(line);
        Emitter::new(syntax)
            .emit_tokens(&parsed.tokens)
            .iter()
            .map(|n| n.to_html(true))
            .collect()
    }

    fn with_nesting(max_nesting: usize) -> ComputedSyntax {
        let syntax = SyntaxConfig {
            max_nesting,
            ..SyntaxConfig::default()
        };
        ComputedSyntax::from_config(&FeaturesConfig::default(), &syntax)
    }

    #[test]
    fn test_leftovers_at_edges() {
        let syntax = ComputedSyntax::default();
        assert_eq!(html(&syntax, "**inside**"), "<strong>*inside*</strong>");
        assert_eq!(html(&syntax, "~~~~inside~~~~"), "<em>~~inside~~</em>");
        assert_eq!(html(&syntax, "***x*"), "<strong>**x</strong>");
    }

    #[test]
    fn test_nested_types() {
        let syntax = ComputedSyntax::default();
        assert_eq!(
            html(&syntax, "*a __b__ c*"),
            r#"<strong>a <em class="underline">b</em> c</strong>"#
        );
        assert_eq!(
            html(&syntax, "--~~*x*~~--"),
            "<del><em><strong>x</strong></em></del>"
        );
    }

    #[test]
    fn test_same_type_inside_is_literal() {
        let syntax = ComputedSyntax::default();
        assert_eq!(html(&syntax, "*a *b* c*"), "<strong>a *b</strong> c*");
    }

    #[test]
    fn test_depth_guard() {
        assert_eq!(html(&with_nesting(1), "~~*both*~~"), "<em>*both*</em>");
        assert_eq!(
            html(&with_nesting(2), "--~~*x*~~--"),
            "<del><em>*x*</em></del>"
        );
    }

    #[test]
    fn test_rule_and_opaque_nodes() {
        let syntax = ComputedSyntax::default();
        assert_eq!(
            html(&syntax, "*a ------ b*"),
            r#"<strong>a <hr class="line"/> b</strong>"#
        );
        assert_eq!(
            html(&syntax, "--a <!-- c --> b--"),
            "<del>a &lt;!-- c --&gt; b</del>"
        );
    }

    #[test]
    fn test_opaque_spans_are_escaped_text() {
        let syntax = ComputedSyntax::default();
        assert_eq!(
            html(&syntax, "hi [<img src=x onerror=alert(1)>_blank]"),
            "hi [&lt;img src=x onerror=alert(1)&gt;_blank]"
        );
        assert_eq!(
            html(&syntax, "<!--><script>alert(1)</script><!-- -->"),
            "&lt;!--&gt;&lt;script&gt;alert(1)&lt;/script&gt;&lt;!-- --&gt;"
        );
        assert_eq!(html(&syntax, "[a>_blank]"), "[a&gt;_blank]");
    }

    #[test]
    fn test_opaque_text_merges_with_literals() {
        let syntax = ComputedSyntax::default();
        let parsed = Parser::new().parse_line("a <!-- *b* --> c");
        let nodes = Emitter::new(&syntax).emit_tokens(&parsed.tokens);
        assert_eq!(nodes, vec![RenderedNode::Text("a <!-- *b* --> c".to_string())]);
    }
}
