//! Syntax configuration.
//!
//! This module contains the `SyntaxConfig` struct which holds the
//! numeric limits and token sets the engine matches against.

use serde::{Deserialize, Serialize};

/// Smallest accepted horizontal rule threshold.
///
/// Anything shorter would swallow an ordinary `--x--` strike pair.
pub const MIN_RULE_DASHES: usize = 4;

/// Syntax configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SyntaxConfig {
    /// Raw dash count at which a standalone run becomes a rule.
    /// Default: 6
    #[serde(default = "default_rule_min_dashes")]
    pub rule_min_dashes: usize,

    /// Maximum depth of nested differently-typed spans.
    /// Default: 8
    #[serde(default = "default_max_nesting")]
    pub max_nesting: usize,

    /// Link-target tokens that make a `[...>...]` bracket opaque.
    /// Default: ["_blank"]
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            rule_min_dashes: default_rule_min_dashes(),
            max_nesting: default_max_nesting(),
            targets: default_targets(),
        }
    }
}

/// Syntax settings named by an override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartialSyntax {
    pub rule_min_dashes: Option<usize>,
    pub max_nesting: Option<usize>,
    pub targets: Option<Vec<String>>,
}

impl SyntaxConfig {
    /// Merge an override into this one, leaving unset fields alone.
    ///
    /// A `Targets` list replaces the current one rather than extending it.
    pub fn merge(&mut self, other: &PartialSyntax) {
        if let Some(rule_min_dashes) = other.rule_min_dashes {
            self.rule_min_dashes = rule_min_dashes;
        }
        if let Some(max_nesting) = other.max_nesting {
            self.max_nesting = max_nesting;
        }
        if let Some(targets) = &other.targets {
            self.targets = targets.clone();
        }
    }
}

fn default_rule_min_dashes() -> usize {
    6
}

fn default_max_nesting() -> usize {
    8
}

fn default_targets() -> Vec<String> {
    vec!["_blank".to_string()]
}
