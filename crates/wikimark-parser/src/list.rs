//! Line-initial list prefixes.
//!
//! `* item` and `-- nested item` start with bullet characters that would
//! otherwise read as an emphasis opener. The leading run is recorded as
//! the line's list depth and removed from delimiter eligibility.

use serde::Serialize;
use wikimark_core::ListMarker;

/// A consumed list-bullet run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListPrefix {
    /// Bullet character
    pub marker: ListMarker,
    /// Number of bullet characters, the list nesting depth
    pub depth: u32,
}

impl ListPrefix {
    /// Byte length of the prefix within its line.
    pub fn len(&self) -> usize {
        self.depth as usize
    }

    /// Whether the prefix holds no bullets.
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// The bullet characters as written.
    pub fn source(&self) -> String {
        crate::tokenizer::repeat_char(self.marker.char(), self.len())
    }
}

/// Recognize a list prefix at the start of `line`.
///
/// The run must be followed by whitespace and the line must carry
/// non-whitespace content after it. A dash run of at least
/// `rule_min_dashes` is a horizontal rule, never a bullet.
pub fn consume_list_prefix(line: &str, rule_min_dashes: Option<usize>) -> Option<ListPrefix> {
    let first = line.chars().next()?;
    let marker = ListMarker::from_char(first)?;

    let depth = line.bytes().take_while(|&b| b == first as u8).count();
    let rest = &line[depth..];

    if !rest.starts_with(char::is_whitespace) || rest.trim().is_empty() {
        return None;
    }
    if marker == ListMarker::Dash && rule_min_dashes.is_some_and(|min| depth >= min) {
        return None;
    }

    Some(ListPrefix {
        marker,
        depth: u32::try_from(depth).unwrap_or(u32::MAX),
    })
}
