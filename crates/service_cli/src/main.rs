//! Chromarisk CLI - Command Line Operations for the Colour Risk Engine
//!
//! This is the operational entry point for the chromarisk engine.
//!
//! # Commands
//!
//! - `chromarisk companies` - List, filter, sort, and paginate companies
//! - `chromarisk summaries` - Per-colour risk summaries
//! - `chromarisk stats` - Portfolio statistics over a filtered subset
//! - `chromarisk compare` - Side-by-side comparison with what-if selections
//! - `chromarisk what-if` - Simulate recolouring one company
//! - `chromarisk scenario` - Bulk recolor scenario over a filtered subset
//! - `chromarisk check` - Verify palette integrity and determinism
//!
//! # Architecture
//!
//! As the service layer, this crate builds the engine once from the
//! deterministic generator and orchestrates the lower layers behind a
//! unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use chroma_risk::RiskEngine;
use config::CliConfig;

/// Chromarisk Colour Risk Engine CLI
#[derive(Parser)]
#[command(name = "chromarisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(long, global = true, default_value = "chromarisk.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List companies with filtering, sorting, and pagination
    Companies {
        /// Keep only companies wearing one of these logo colours
        #[arg(short = 'c', long = "color")]
        colors: Vec<String>,

        /// Case-insensitive name substring filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort key (name, risk, color)
        #[arg(long, default_value = "name")]
        sort: String,

        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Companies per page (defaults from configuration)
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show per-colour risk summaries
    Summaries {
        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Portfolio statistics over the (optionally filtered) portfolio
    Stats {
        /// Keep only companies wearing one of these logo colours
        #[arg(short = 'c', long = "color")]
        colors: Vec<String>,

        /// Case-insensitive name substring filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Compare selected companies side by side
    Compare {
        /// Company ids to compare (repeatable)
        #[arg(long = "id", required = true)]
        ids: Vec<String>,

        /// What-if selection per company, e.g. company-1=Crimson (repeatable)
        #[arg(long = "simulate")]
        simulations: Vec<String>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Simulate recolouring one company
    WhatIf {
        /// Company id, e.g. company-17
        #[arg(long)]
        company: String,

        /// Candidate logo colour name
        #[arg(long)]
        color: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Bulk recolor scenario over a filtered subset
    Scenario {
        /// Candidate logo colour name
        #[arg(long)]
        color: String,

        /// Keep only companies wearing one of these logo colours
        #[arg(long = "filter-color")]
        colors: Vec<String>,

        /// Case-insensitive name substring filter
        #[arg(short, long, default_value = "")]
        search: String,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check palette integrity and generation determinism
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load(&cli.config)?;
    let engine = RiskEngine::from_companies(chroma_data::generate());

    match cli.command {
        Commands::Companies {
            colors,
            search,
            sort,
            page,
            page_size,
            format,
        } => commands::companies::run(
            &engine,
            &config,
            &colors,
            &search,
            &sort,
            page,
            page_size,
            format.as_deref(),
        ),
        Commands::Summaries { format } => {
            commands::summaries::run(&engine, &config, format.as_deref())
        }
        Commands::Stats {
            colors,
            search,
            format,
        } => commands::stats::run(&engine, &config, &colors, &search, format.as_deref()),
        Commands::Compare {
            ids,
            simulations,
            format,
        } => commands::compare::run(&engine, &config, &ids, &simulations, format.as_deref()),
        Commands::WhatIf {
            company,
            color,
            format,
        } => commands::whatif::run(&engine, &config, &company, &color, format.as_deref()),
        Commands::Scenario {
            color,
            colors,
            search,
            format,
        } => commands::scenario::run(&engine, &config, &color, &colors, &search, format.as_deref()),
        Commands::Check => commands::check::run(&engine),
    }
}
