//! Gigcast CLI - income forecasting for irregular earners
//!
//! Usage:
//!   gigcast forecast --file income.csv --months 3
//!   gigcast analyze --file income.csv
//!   gigcast advise --file income.csv

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Forecast { file, months, json } => commands::cmd_forecast(&file, months, json),
        Commands::Analyze { file, json } => commands::cmd_analyze(&file, json),
        Commands::Advise { file, months } => commands::cmd_advise(&file, months),
    }
}
