//! Fintrack CLI - Personal finance tracker
//!
//! Usage:
//!   fintrack predict --file transactions.csv    Forecast next month per category
//!   fintrack analyze                            This month vs last month
//!   fintrack breakdown --limit 5                Top categories this month
//!   fintrack export --output backup.csv         Normalized CSV export

mod cli;
mod commands;

#[cfg(test)]
mod tests;

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

    run(&cli)
}

/// Dispatch a parsed command; only commands that read transactions load the file
fn run(cli: &Cli) -> Result<()> {
    let open = || commands::open_ledger(&cli.file, cli.as_of.as_deref(), cli.config.as_deref());

    match &cli.command {
        Commands::Categories => commands::cmd_categories(cli.json),
        Commands::Predict => commands::cmd_predict(&open()?, cli.json),
        Commands::Analyze => commands::cmd_analyze(&open()?, cli.json),
        Commands::Summary => commands::cmd_summary(&open()?, cli.json),
        Commands::Trend { months } => commands::cmd_trend(&open()?, *months, cli.json),
        Commands::Breakdown { limit } => commands::cmd_breakdown(&open()?, *limit, cli.json),
        Commands::Export { output } => commands::cmd_export(&open()?, output.as_deref()),
    }
}
