//! wm - inline wiki emphasis renderer.
//!
//! This binary provides the CLI interface to the wikimark engine,
//! rendering files or stdin one line at a time.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use wikimark_config::Config;
use wikimark_core::{Result, WikimarkError};
use wikimark_render::{RenderedLine, Renderer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("wikimark v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let renderer = Renderer::from_config(&config);
    debug!("Syntax: {:?}", renderer.syntax());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        // Flush per line so piped input streams through
        for line in io::stdin().lock().lines() {
            emit_line(&renderer, &line?, cli, &mut out)?;
            out.flush()?;
        }
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            for line in reader.lines() {
                emit_line(&renderer, &line?, cli, &mut out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    if cli.no_escape {
        config.features.escape_html = false;
    }
    Ok(config)
}

/// Render a single line and write it in the selected format.
fn emit_line<W: Write>(renderer: &Renderer, line: &str, cli: &Cli, out: &mut W) -> Result<()> {
    trace!("Input line: {}", line);
    let rendered = renderer.render_line(line);

    if cli.depth {
        write!(out, "{}\t", rendered.list_prefix_depth())?;
    }
    let body = format_line(&rendered, cli.format, renderer.escape_html())?;
    writeln!(out, "{}", body)?;
    Ok(())
}

/// Serialize a rendered line.
fn format_line(rendered: &RenderedLine, format: OutputFormat, escape: bool) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(rendered.to_html(escape)),
        OutputFormat::Json => serde_json::to_string(rendered)
            .map_err(|e| WikimarkError::Render(format!("JSON serialization failed: {}", e))),
        OutputFormat::Text => {
            let mut text = rendered
                .list_prefix
                .map(|p| p.source())
                .unwrap_or_default();
            text.push_str(&rendered.text());
            Ok(text)
        }
    }
}
