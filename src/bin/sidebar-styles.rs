//! Command line front end: resolve a token file and print the stylesheet.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use console::style;
use sidebar_styles::{
    detect_color_mode, AdaptiveTokens, ClassNames, ColorMode, StyleRegistry, TokenBundle,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Follow the operating system preference
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Json,
}

/// Resolve design tokens into the sidebar stylesheet.
#[derive(Debug, Parser)]
#[command(name = "sidebar-styles", version, about)]
struct Cli {
    /// JSON or YAML token file layered over the defaults of the selected mode
    #[arg(long, value_name = "FILE")]
    tokens: Option<PathBuf>,

    /// Which default bundle to start from
    #[arg(long, value_enum, default_value_t = Mode::Auto)]
    mode: Mode,

    /// Prefix emitted class names as `<PREFIX>-<class>`
    #[arg(long)]
    prefix: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Css)]
    format: Format,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let overrides = match &cli.tokens {
        Some(path) => TokenBundle::from_path(path)
            .with_context(|| format!("loading tokens from {}", path.display()))?,
        None => TokenBundle::new(),
    };

    let mode = match cli.mode {
        Mode::Auto => detect_color_mode(),
        Mode::Light => ColorMode::Light,
        Mode::Dark => ColorMode::Dark,
    };
    tracing::debug!(?mode, "selected color mode");

    let names = match cli.prefix {
        Some(prefix) => ClassNames::with_prefix(prefix)?,
        None => ClassNames::new(),
    };

    let adaptive = AdaptiveTokens::with_defaults(&overrides);
    let registry = StyleRegistry::build(adaptive.for_mode(mode))
        .context("token bundle cannot style every slot")?;

    match cli.format {
        Format::Css => Ok(registry.to_css(&names)),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&registry)?;
            json.push('\n');
            Ok(json)
        }
    }
}
