//! Binary entry point for stonecat.
//!
//! This binary provides the CLI interface for the stonecat catalog.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stonecat::catalog;
use stonecat::cli::{
    OutputFormat, SearchArgs, cmd_categories, cmd_estimate, cmd_search, cmd_show, cmd_types,
};
use stonecat::config::StonecatConfig;
use stonecat::observability;
use tracing::warn;

/// Stonecat - Browse and filter a stone heritage catalog.
#[derive(Parser)]
#[command(name = "stonecat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog file to load instead of the configured one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Search the catalog.
    Search {
        /// Search text; may include `type:`, `cat:`, `tag:` and `match:` filters.
        terms: Vec<String>,

        /// Content type (monument, quarry, marble, company or all).
        #[arg(short = 't', long = "type")]
        content_type: Option<String>,

        /// Category label, matched exactly (`all` for any).
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Required tag (repeatable).
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Tag combination mode: any or all.
        #[arg(short = 'm', long = "match")]
        tag_match: Option<String>,

        /// Show featured records in their own section.
        #[arg(long)]
        featured_split: bool,

        /// Maximum number of results (0 for no limit).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (table, json, yaml).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List content types.
    Types {
        /// Output format (table, json, yaml).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List categories present in the catalog.
    Categories {
        /// Output format (table, json, yaml).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show a single record.
    Show {
        /// Record id.
        id: String,

        /// Output format (table, json, yaml).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Estimate the cost of a stone surface.
    Estimate {
        /// Length in feet.
        #[arg(long)]
        length: f64,

        /// Width in feet.
        #[arg(long)]
        width: f64,

        /// Material (marble, granite, limestone, sandstone).
        #[arg(short, long, default_value = "marble")]
        material: String,

        /// Output format (table, json, yaml).
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Configuration management.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref(), cli.catalog.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init_from_config(&config, cli.verbose) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: &StonecatConfig) -> Result<()> {
    let verbose = cli.verbose;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search {
            terms,
            content_type,
            category,
            tags,
            tag_match,
            featured_split,
            limit,
            format,
        } => {
            let dataset = open_dataset(config)?;
            let args = SearchArgs {
                terms,
                content_type,
                category,
                tags,
                tag_match,
                featured_split,
                limit,
                format: parse_format(&format),
            };
            cmd_search(&mut out, &dataset, config, &args, verbose).map_err(into_anyhow)
        },

        Commands::Types { format } => {
            cmd_types(&mut out, parse_format(&format), verbose).map_err(into_anyhow)
        },

        Commands::Categories { format } => {
            let dataset = open_dataset(config)?;
            cmd_categories(&mut out, &dataset, parse_format(&format)).map_err(into_anyhow)
        },

        Commands::Show { id, format } => {
            let dataset = open_dataset(config)?;
            cmd_show(&mut out, &dataset, &id, parse_format(&format)).map_err(into_anyhow)
        },

        Commands::Estimate {
            length,
            width,
            material,
            format,
        } => cmd_estimate(&mut out, length, width, &material, parse_format(&format))
            .map_err(into_anyhow),

        Commands::Config { show } => {
            cmd_config(config, show);
            Ok(())
        },

        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "stonecat", &mut out);
            Ok(())
        },
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>, catalog: Option<&Path>) -> Result<StonecatConfig> {
    let config = if let Some(config_path) = path {
        StonecatConfig::load_from_file(Path::new(config_path))
            .with_context(|| format!("loading {config_path}"))?
    } else {
        match std::env::var("STONECAT_CONFIG_PATH") {
            Ok(config_path) if !config_path.trim().is_empty() => {
                StonecatConfig::load_from_file(Path::new(&config_path))
                    .with_context(|| format!("loading {config_path}"))?
            },
            _ => StonecatConfig::load_default(),
        }
    };

    let config = config.with_env_overrides();
    Ok(match catalog {
        Some(catalog) => config.with_catalog_path(catalog),
        None => config,
    })
}

/// Loads the catalog and reports skipped records.
fn open_dataset(config: &StonecatConfig) -> Result<catalog::Dataset> {
    let report = catalog::open(config).context("loading catalog")?;
    for issue in &report.issues {
        warn!(%issue, "Skipped catalog record");
    }
    Ok(report.dataset)
}

fn parse_format(s: &str) -> OutputFormat {
    s.parse().unwrap_or_default()
}

/// Converts a boxed command error, keeping each `source()` level as context.
fn into_anyhow(e: Box<dyn std::error::Error>) -> anyhow::Error {
    let mut messages = vec![e.to_string()];
    let mut source = e.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }

    let mut levels = messages.into_iter().rev();
    let root = anyhow::anyhow!(levels.next().unwrap_or_default());
    levels.fold(root, anyhow::Error::context)
}

/// Config command.
fn cmd_config(config: &StonecatConfig, show: bool) {
    if show {
        println!("Current Configuration");
        println!("=====================");
        println!();
        println!(
            "Catalog: {}",
            config
                .catalog_path
                .as_ref()
                .map_or_else(|| "(built-in seed catalog)".to_string(), |p| p.display().to_string())
        );
        println!("Tag Match: {}", config.tag_match);
        println!("Max Results: {}", config.max_results);
        println!("Lenient Ingest: {}", config.lenient);
        println!();
        println!("Logging:");
        println!(
            "  Level: {}",
            config.logging.level.as_deref().unwrap_or("(default)")
        );
        println!(
            "  Format: {}",
            config.logging.format.as_deref().unwrap_or("pretty")
        );
        println!(
            "  File: {}",
            config
                .logging
                .file
                .as_ref()
                .map_or_else(|| "(stderr)".to_string(), |p| p.display().to_string())
        );
    } else {
        println!("Use --show to display configuration");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("writing output")]
    struct WriteFailed(#[source] io::Error);

    #[test]
    fn test_into_anyhow_keeps_source_chain() {
        let boxed: Box<dyn std::error::Error> =
            Box::new(WriteFailed(io::Error::other("pipe closed")));
        let err = into_anyhow(boxed);

        assert_eq!(err.to_string(), "writing output");
        assert_eq!(format!("{err:#}"), "writing output: pipe closed");
        assert_eq!(err.chain().count(), 2);
    }
}
