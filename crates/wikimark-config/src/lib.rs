//! Wikimark Config
//!
//! This crate handles configuration loading and management
//! for wikimark, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/wikimark/config.toml`
//! - macOS: `~/Library/Application Support/wikimark/config.toml`
//! - Windows: `%APPDATA%\wikimark\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use wikimark_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an override file
//! let config = Config::load_with_override(Some("./custom.toml")).unwrap();
//! ```

mod computed;
mod features;
mod syntax;

pub use computed::ComputedSyntax;
pub use features::{FeaturesConfig, PartialFeatures};
pub use syntax::{PartialSyntax, SyntaxConfig, MIN_RULE_DASHES};

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wikimark_core::{Result, WikimarkError};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[features]
Comments        = true
LinkTargets     = true
ListPrefixes    = true
HorizontalRules = true
EscapeHtml      = true

[syntax]
RuleMinDashes   = 6
MaxNesting      = 8
Targets         = ["_blank"]
"#;

/// Main configuration structure.
///
/// Contains all configuration sections for wikimark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Feature flags configuration
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Syntax limits and token sets
    #[serde(default)]
    pub syntax: SyntaxConfig,
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use wikimark_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[features]"));
    /// assert!(toml.contains("[syntax]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "wikimark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("Loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| WikimarkError::Config(format!("Parse error in {}: {}", path.display(), e)))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Example
    ///
    /// ```
    /// use wikimark_config::Config;
    /// let config = Config::parse("[syntax]\nRuleMinDashes = 8").unwrap();
    /// assert_eq!(config.syntax.rule_min_dashes, 8);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WikimarkError::Config(e.to_string()))
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location
    /// 2. If `override_config` is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// Keys the override leaves out keep their base values.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wikimark_config::Config;
    ///
    /// // Load with inline TOML override
    /// let config = Config::load_with_override(Some("[features]\nEscapeHtml = false")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);

            let override_toml = if override_path.exists() {
                debug!("Merging config file {}", override_path.display());
                std::fs::read_to_string(override_path)?
            } else {
                debug!("Merging inline config");
                override_str.to_string()
            };

            let override_config = PartialConfig::parse(&override_toml)
                .map_err(|e| WikimarkError::Config(format!("Override parse error: {}", e)))?;

            config.merge(&override_config);
        }

        Ok(config)
    }

    /// Merge an override into this config.
    ///
    /// Values set in `other` take precedence; everything else is kept.
    ///
    /// # Example
    ///
    /// ```
    /// use wikimark_config::{Config, PartialConfig};
    ///
    /// let mut base = Config::parse("[syntax]\nMaxNesting = 3").unwrap();
    /// let override_config = PartialConfig::parse(r#"
    ///     [features]
    ///     EscapeHtml = false
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert!(!base.features.escape_html);
    /// assert_eq!(base.syntax.max_nesting, 3);
    /// ```
    pub fn merge(&mut self, other: &PartialConfig) {
        self.features.merge(&other.features);
        self.syntax.merge(&other.syntax);
    }

    /// Resolve this config into the settings the engine reads.
    ///
    /// # Example
    ///
    /// ```
    /// use wikimark_config::Config;
    /// let computed = Config::default().computed_syntax();
    /// assert!(computed.is_target("_blank"));
    /// ```
    pub fn computed_syntax(&self) -> ComputedSyntax {
        ComputedSyntax::from_config(&self.features, &self.syntax)
    }
}

/// An override layered on top of a loaded [`Config`].
///
/// Every key is optional; only the keys present are applied by
/// [`Config::merge`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialConfig {
    /// Feature flags to change
    #[serde(default)]
    pub features: PartialFeatures,

    /// Syntax settings to change
    #[serde(default)]
    pub syntax: PartialSyntax,
}

impl PartialConfig {
    /// Parse an override from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| WikimarkError::Config(e.to_string()))
    }
}
