//! Core enums for wikimark inline syntax.
//!
//! These enums name the delimiter families the engine matches, the
//! list bullets it recognizes at line start, and the opaque regions
//! it never rescans.

use serde::{Deserialize, Serialize};

/// The four paired emphasis delimiters.
///
/// Each variant owns exactly one trigger character; no character is
/// shared between two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelimiterType {
    /// `*bold*`
    Bold,
    /// `~~italic~~`
    Italic,
    /// `__underline__`
    Underline,
    /// `--strike--`
    Strike,
}

impl DelimiterType {
    /// Number of delimiter types.
    pub const COUNT: usize = 4;

    /// All delimiter types, in slot order.
    pub const ALL: [DelimiterType; Self::COUNT] = [
        DelimiterType::Bold,
        DelimiterType::Italic,
        DelimiterType::Underline,
        DelimiterType::Strike,
    ];

    /// Map a trigger character to its delimiter type.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(DelimiterType::Bold),
            '~' => Some(DelimiterType::Italic),
            '_' => Some(DelimiterType::Underline),
            '-' => Some(DelimiterType::Strike),
            _ => None,
        }
    }

    /// The trigger character.
    pub fn char(self) -> char {
        match self {
            DelimiterType::Bold => '*',
            DelimiterType::Italic => '~',
            DelimiterType::Underline => '_',
            DelimiterType::Strike => '-',
        }
    }

    /// Raw characters making up one logical marker unit.
    ///
    /// Bold uses a single `*`; the others use doubled characters.
    pub fn unit_width(self) -> usize {
        match self {
            DelimiterType::Bold => 1,
            _ => 2,
        }
    }

    /// HTML tag name used for a matched span.
    pub fn tag(self) -> &'static str {
        match self {
            DelimiterType::Bold => "strong",
            DelimiterType::Italic | DelimiterType::Underline => "em",
            DelimiterType::Strike => "del",
        }
    }

    /// HTML class attribute used for a matched span, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            DelimiterType::Underline => Some("underline"),
            _ => None,
        }
    }

    /// Slot index in `0..COUNT`.
    pub fn index(self) -> usize {
        match self {
            DelimiterType::Bold => 0,
            DelimiterType::Italic => 1,
            DelimiterType::Underline => 2,
            DelimiterType::Strike => 3,
        }
    }
}

impl std::fmt::Display for DelimiterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DelimiterType::Bold => write!(f, "bold"),
            DelimiterType::Italic => write!(f, "italic"),
            DelimiterType::Underline => write!(f, "underline"),
            DelimiterType::Strike => write!(f, "strike"),
        }
    }
}

/// A small set of delimiter types.
///
/// Used to exclude the types of enclosing spans when matching nested
/// content, and the types of unwound openers when matching again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DelimiterSet(u8);

impl DelimiterSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A copy of this set with `kind` added.
    pub fn with(self, kind: DelimiterType) -> Self {
        Self(self.0 | (1 << kind.index()))
    }

    /// Whether `kind` is in the set.
    pub fn contains(self, kind: DelimiterType) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

}

/// Bullet character of a line-initial list prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListMarker {
    /// `* item`, `** nested item`
    Asterisk,
    /// `- item`, `-- nested item`
    Dash,
}

impl ListMarker {
    /// Map a bullet character to its marker.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(ListMarker::Asterisk),
            '-' => Some(ListMarker::Dash),
            _ => None,
        }
    }

    /// The bullet character.
    pub fn char(self) -> char {
        match self {
            ListMarker::Asterisk => '*',
            ListMarker::Dash => '-',
        }
    }
}

impl std::fmt::Display for ListMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListMarker::Asterisk => write!(f, "asterisk"),
            ListMarker::Dash => write!(f, "dash"),
        }
    }
}

/// Kind of region whose interior is never scanned for delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpaqueKind {
    /// `<!-- ... -->`
    Comment,
    /// `[label>reference>_blank]`
    LinkTarget,
}

impl std::fmt::Display for OpaqueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpaqueKind::Comment => write!(f, "comment"),
            OpaqueKind::LinkTarget => write!(f, "link-target"),
        }
    }
}
