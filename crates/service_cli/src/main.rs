//! Tradescope CLI - Command Line Operations for Trade Analytics
//!
//! This is the operational entry point for the tradescope workspace.
//!
//! # Commands
//!
//! - `tradescope generate` - Synthesise a dataset and write it as CSV
//! - `tradescope aggregate` - Print country, monthly and product rollups
//! - `tradescope train` - Fit the volume regressor and report metrics
//! - `tradescope check` - Validate configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the core and
//! adapter crates behind a single command-line interface. Logs go to stderr
//! so report output on stdout stays machine-readable.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use commands::aggregate::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// Tradescope trade analytics CLI
#[derive(Parser)]
#[command(name = "tradescope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "tradescope.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesise a dataset and write it as CSV
    Generate {
        /// Number of records (defaults to the configured row count)
        #[arg(short, long)]
        rows: Option<usize>,

        /// Random seed (defaults to the configured seed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output CSV path (defaults to the configured data path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print KPI, country, monthly, product and route rollups
    Aggregate {
        /// Input CSV (defaults to the configured data path, generated if absent)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Restrict to one calendar year
        #[arg(short, long)]
        year: Option<i32>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Fit the volume regressor and report held-out metrics
    Train {
        /// Input CSV (defaults to the configured data path, generated if absent)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Seed for the split and the forest (defaults to the configured seed)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of trees (defaults to the configured tree count)
        #[arg(short, long)]
        trees: Option<usize>,

        /// Write the category mapping as JSON to this path
        #[arg(short, long)]
        mapping_out: Option<PathBuf>,
    },

    /// Check configuration and dataset status
    Check,
}

fn init_tracing(verbose: bool, config_level: &str) {
    let default_level = if verbose { "debug" } else { config_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = CliConfig::load_or_default(&cli.config).map(CliConfig::with_env_override);
    let log_level = loaded
        .as_ref()
        .map_or("info", |config| config.log_level.as_str())
        .to_lowercase();
    init_tracing(cli.verbose, &log_level);

    let config = loaded?;
    debug!(?config, "Resolved configuration");

    if let Commands::Check = cli.command {
        return commands::check::run(&config, &cli.config);
    }
    config.validate()?;

    match cli.command {
        Commands::Generate { rows, seed, output } => commands::generate::run(
            rows.unwrap_or(config.rows),
            seed.unwrap_or(config.seed),
            output.as_deref().unwrap_or(&config.data_path),
        ),
        Commands::Aggregate {
            input,
            year,
            format,
        } => commands::aggregate::run(input.as_deref(), year, format, &config),
        Commands::Train {
            input,
            seed,
            trees,
            mapping_out,
        } => commands::train::run(
            input.as_deref(),
            seed.unwrap_or(config.seed),
            trees.unwrap_or(config.trees),
            mapping_out.as_deref(),
            &config,
        ),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
