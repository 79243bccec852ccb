//! CLI argument definitions using clap
//!
//! This module contains the clap structs for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fintrack - Forecast next month's spending
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Personal finance tracker with next-month expense forecasts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transactions file (CSV or JSON, chosen by extension)
    #[arg(short, long, default_value = "transactions.csv", global = true)]
    pub file: PathBuf,

    /// Reference date for "this month" (YYYY-MM-DD, defaults to today)
    #[arg(long, global = true)]
    pub as_of: Option<String>,

    /// Forecaster config file (TOML)
    ///
    /// Without this flag, `<data dir>/fintrack/config/forecast.toml` is used
    /// when present, otherwise the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict next month's expenses per category
    Predict,

    /// Compare this month's spending with last month
    Analyze,

    /// Income, expenses and savings for this month
    Summary,

    /// Expense totals for recent months
    Trend {
        /// Number of months to show, ending with this month
        #[arg(short, long, default_value = "6")]
        months: usize,
    },

    /// This month's expenses by category
    Breakdown {
        /// Maximum number of categories to show
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },

    /// Export transactions to CSV
    Export {
        /// Output file (defaults to transactions_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List built-in categories
    Categories,
}
