//! Horizontal rule interception.
//!
//! A long dash run standing on its own (`this is a ------ line`) is a
//! rule, not a strike pair. It is rewritten before matching so the
//! matcher never sees it as a delimiter.

use log::trace;
use wikimark_core::DelimiterType;

use crate::tokenizer::Token;

/// Rewrite standalone dash runs of at least `min_dashes` into [`Token::Rule`].
///
/// Standalone means the characters on both sides are whitespace
/// or line boundaries.
pub fn intercept_rules(tokens: &mut [Token], min_dashes: usize) {
    for i in 0..tokens.len() {
        let run = match &tokens[i] {
            Token::Delimiter(run)
                if run.kind == DelimiterType::Strike && run.raw_len >= min_dashes =>
            {
                *run
            }
            _ => continue,
        };

        let before = i.checked_sub(1).and_then(|j| tokens[j].last_char());
        let after = tokens.get(i + 1).and_then(Token::first_char);
        if is_boundary(before) && is_boundary(after) {
            trace!("rule at byte {} ({} dashes)", run.offset, run.raw_len);
            tokens[i] = Token::Rule(run);
        }
    }
}

fn is_boundary(c: Option<char>) -> bool {
    c.map_or(true, char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    fn rules(line: &str, min: usize) -> usize {
        let mut tokens = Tokenizer::new().tokenize(line);
        intercept_rules(&mut tokens, min);
        tokens
            .iter()
            .filter(|t| matches!(t, Token::Rule(_)))
            .count()
    }

    #[test]
    fn test_standalone_rule() {
        assert_eq!(rules("this is a ------ line", 6), 1);
        assert_eq!(rules("------", 6), 1);
        assert_eq!(rules("----------", 6), 1);
    }

    #[test]
    fn test_short_run_is_not_rule() {
        assert_eq!(rules("this is a ----- line", 6), 0);
        assert_eq!(rules("a ---- b", 4), 1);
    }

    #[test]
    fn test_attached_run_is_not_rule() {
        assert_eq!(rules("a------b", 6), 0);
        assert_eq!(rules("a ------b", 6), 0);
        assert_eq!(rules("a------ b", 6), 0);
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(rules("a ****** b", 6), 0);
    }
}
