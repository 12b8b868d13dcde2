//! Computed syntax values.
//!
//! This module contains `ComputedSyntax`, the resolved form of the
//! configuration that the parser and renderer read on every line.

use std::collections::HashSet;

use crate::features::FeaturesConfig;
use crate::syntax::{SyntaxConfig, MIN_RULE_DASHES};

/// Resolved engine settings.
///
/// Limits are clamped and the link-target list is turned into a set,
/// so per-line lookups are constant time.
#[derive(Debug, Clone)]
pub struct ComputedSyntax {
    /// Opaque `<!-- ... -->` spans.
    pub comments: bool,
    /// Opaque `[...>target]` spans.
    pub link_targets: bool,
    /// Line-initial list prefixes.
    pub list_prefixes: bool,
    /// Horizontal rule interception.
    pub horizontal_rules: bool,
    /// HTML escaping of literal text.
    pub escape_html: bool,
    /// Raw dash count for a rule, at least [`MIN_RULE_DASHES`].
    pub rule_min_dashes: usize,
    /// Depth guard for nested span resolution, at least 1.
    pub max_nesting: usize,
    /// Recognized link-target tokens, trimmed and non-empty.
    pub targets: HashSet<String>,
}

impl Default for ComputedSyntax {
    fn default() -> Self {
        Self::from_config(&FeaturesConfig::default(), &SyntaxConfig::default())
    }
}

impl ComputedSyntax {
    /// Resolve feature flags and syntax settings.
    pub fn from_config(features: &FeaturesConfig, syntax: &SyntaxConfig) -> Self {
        let targets = syntax
            .targets
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            comments: features.comments,
            link_targets: features.link_targets,
            list_prefixes: features.list_prefixes,
            horizontal_rules: features.horizontal_rules,
            escape_html: features.escape_html,
            rule_min_dashes: syntax.rule_min_dashes.max(MIN_RULE_DASHES),
            max_nesting: syntax.max_nesting.max(1),
            targets,
        }
    }

    /// Whether `token` is a recognized link target.
    pub fn is_target(&self, token: &str) -> bool {
        self.targets.contains(token.trim())
    }
}
