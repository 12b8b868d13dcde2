//! Command-line interface for wikimark.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output representation of each rendered line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Serialized HTML markup
    Html,
    /// The rendered node tree as JSON, one object per line
    Json,
    /// Literal text only, markup stripped
    Text,
}

/// wm - render inline wiki emphasis to HTML.
///
/// Converts `*bold*`, `~~italic~~`, `__underline__`, `--strike--` and
/// standalone dash rules line by line, leaving comments and link-target
/// brackets untouched.
#[derive(Parser, Debug)]
#[command(
    name = "wm",
    author = "Wikimark Contributors",
    version,
    about = "Render inline wiki emphasis to HTML",
    after_help = "Examples:\n  \
                  echo '*bold* and __underline__' | wm\n  \
                  wm page.wiki\n  \
                  wm -f json --depth notes.wiki\n  \
                  wm -c '[syntax]\nRuleMinDashes = 8' page.wiki"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Do not HTML-escape literal text
    #[arg(long = "no-escape")]
    pub no_escape: bool,

    /// Prefix each line with its list depth and a tab
    #[arg(long = "depth")]
    pub depth: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use wikimark_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
