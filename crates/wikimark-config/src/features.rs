//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which switches
//! the context-sensitive parts of the engine on and off.

use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls which context rules the inline engine applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Treat `<!-- ... -->` as an opaque span.
    /// Default: true
    #[serde(default = "default_true")]
    pub comments: bool,

    /// Treat `[label>reference>_blank]` as an opaque span.
    /// Default: true
    #[serde(default = "default_true")]
    pub link_targets: bool,

    /// Consume line-initial `* ` / `-- ` runs as list syntax.
    /// Default: true
    #[serde(default = "default_true")]
    pub list_prefixes: bool,

    /// Turn standalone dash runs into `<hr class="line"/>`.
    /// Default: true
    #[serde(default = "default_true")]
    pub horizontal_rules: bool,

    /// HTML-escape literal text when serializing.
    /// Default: true
    #[serde(default = "default_true")]
    pub escape_html: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}

/// Feature flags named by an override, each absent unless set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartialFeatures {
    pub comments: Option<bool>,
    pub link_targets: Option<bool>,
    pub list_prefixes: Option<bool>,
    pub horizontal_rules: Option<bool>,
    pub escape_html: Option<bool>,
}

impl FeaturesConfig {
    /// Merge an override into this one.
    ///
    /// Only the flags the override sets are changed.
    pub fn merge(&mut self, other: &PartialFeatures) {
        if let Some(comments) = other.comments {
            self.comments = comments;
        }
        if let Some(link_targets) = other.link_targets {
            self.link_targets = link_targets;
        }
        if let Some(list_prefixes) = other.list_prefixes {
            self.list_prefixes = list_prefixes;
        }
        if let Some(horizontal_rules) = other.horizontal_rules {
            self.horizontal_rules = horizontal_rules;
        }
        if let Some(escape_html) = other.escape_html {
            self.escape_html = escape_html;
        }
    }

    /// Create a new FeaturesConfig with all features enabled.
    pub fn all_enabled() -> Self {
        Self {
            comments: true,
            link_targets: true,
            list_prefixes: true,
            horizontal_rules: true,
            escape_html: true,
        }
    }

    /// Create a new FeaturesConfig with all features disabled.
    ///
    /// Only bare delimiter matching remains.
    pub fn all_disabled() -> Self {
        Self {
            comments: false,
            link_targets: false,
            list_prefixes: false,
            horizontal_rules: false,
            escape_html: false,
        }
    }
}

fn default_true() -> bool {
    true
}
