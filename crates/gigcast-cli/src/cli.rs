//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gigcast - Forecast irregular income
#[derive(Parser)]
#[command(name = "gigcast")]
#[command(about = "Income forecasting for gig workers and freelancers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project future monthly income from an income CSV
    Forecast {
        /// Income CSV file (date,amount[,source] columns)
        #[arg(short, long)]
        file: PathBuf,

        /// Number of future months to predict
        #[arg(short, long, default_value = "3")]
        months: usize,

        /// Emit JSON instead of a formatted report
        #[arg(long)]
        json: bool,
    },

    /// Classify income trend, volatility, and seasonality
    Analyze {
        /// Income CSV file (date,amount[,source] columns)
        #[arg(short, long)]
        file: PathBuf,

        /// Emit JSON instead of a formatted report
        #[arg(long)]
        json: bool,
    },

    /// Generate plain-language financial advice
    Advise {
        /// Income CSV file (date,amount[,source] columns)
        #[arg(short, long)]
        file: PathBuf,

        /// Number of future months to feed into the advice
        #[arg(short, long, default_value = "3")]
        months: usize,
    },
}
