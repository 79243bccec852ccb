//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use fintrack_core::import::load_transactions;
use tempfile::{NamedTempFile, TempDir};

use crate::cli::{Cli, Commands};
use crate::commands::{self, truncate, Ledger};
use crate::run;

const SAMPLE_CSV: &str = "Date,Type,Category,Description,Amount (₹)
2026-09-01,income,Salary,September pay,50000
2026-09-03,expense,Rent,\"Flat 4B\",15000
2026-09-12,expense,Groceries,\"Market, weekly\",4000
2026-10-01,income,Salary,October pay,50000
2026-10-03,expense,Rent,\"Flat 4B\",15000
2026-10-05,expense,Groceries,Market,5000
";

fn write_sample(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn sample_ledger() -> (NamedTempFile, Ledger) {
    let file = write_sample(".csv", SAMPLE_CSV);
    let ledger = commands::open_ledger(file.path(), Some("2026-10-16"), None).unwrap();
    (file, ledger)
}

// ========== Shared Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
    assert_eq!(truncate("this is a long string", 10), "this is...");
    assert_eq!(truncate("Bills & Utilities", 8), "Bills...");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("₹₹₹₹₹₹₹₹", 5), "₹₹...");
}

#[test]
fn test_resolve_as_of() {
    assert_eq!(
        commands::resolve_as_of(Some("2026-03-31")).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()
    );
    assert!(commands::resolve_as_of(Some("31/03/2026")).is_err());
    assert!(commands::resolve_as_of(None).is_ok());
}

#[test]
fn test_open_ledger() {
    let (_file, ledger) = sample_ledger();

    assert_eq!(ledger.transactions.len(), 6);
    assert_eq!(ledger.today, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    assert_eq!(ledger.config.window_months, 6);
}

#[test]
fn test_open_ledger_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = commands::open_ledger(&dir.path().join("missing.csv"), None, None);

    let message = format!("{:#}", result.err().unwrap());
    assert!(message.contains("Failed to load transactions"));
}

#[test]
fn test_open_ledger_bad_row() {
    let file = write_sample(
        ".csv",
        "Date,Type,Category,Description,Amount\n2026-10-01,expense,Rent,,-5\n",
    );
    assert!(commands::open_ledger(file.path(), None, None).is_err());
}

#[test]
fn test_open_ledger_with_config() {
    let data = write_sample(".csv", SAMPLE_CSV);
    let config = write_sample(".toml", "[window]\nmonths = 3\n");

    let ledger = commands::open_ledger(data.path(), None, Some(config.path())).unwrap();
    assert_eq!(ledger.config.window_months, 3);
    assert_eq!(ledger.config.smoothing_window, 3);
}

#[test]
fn test_open_ledger_invalid_config() {
    let data = write_sample(".csv", SAMPLE_CSV);
    let config = write_sample(".toml", "[window]\nmonths = 0\n");

    let result = commands::open_ledger(data.path(), None, Some(config.path()));
    let message = format!("{:#}", result.err().unwrap());
    assert!(message.contains("Failed to load forecaster config"));
}

#[test]
fn test_ledger_forecaster_uses_reference_date() {
    let (_file, ledger) = sample_ledger();
    let forecaster = ledger.forecaster();

    assert_eq!(forecaster.reference_date(), ledger.today);
    assert_eq!(forecaster.config(), &ledger.config);
}

// ========== Forecast Command Tests ==========

#[test]
fn test_cmd_predict() {
    let (_file, ledger) = sample_ledger();
    assert!(commands::cmd_predict(&ledger, false).is_ok());
    assert!(commands::cmd_predict(&ledger, true).is_ok());
}

#[test]
fn test_cmd_predict_empty() {
    let file = write_sample(".csv", "Date,Type,Category,Description,Amount\n");
    let ledger = commands::open_ledger(file.path(), Some("2026-10-16"), None).unwrap();

    assert!(ledger.transactions.is_empty());
    assert!(commands::cmd_predict(&ledger, false).is_ok());
}

#[test]
fn test_cmd_analyze() {
    let (_file, ledger) = sample_ledger();
    assert!(commands::cmd_analyze(&ledger, false).is_ok());
    assert!(commands::cmd_analyze(&ledger, true).is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_summary() {
    let (_file, ledger) = sample_ledger();
    assert!(commands::cmd_summary(&ledger, false).is_ok());
    assert!(commands::cmd_summary(&ledger, true).is_ok());
}

#[test]
fn test_cmd_trend() {
    let (_file, ledger) = sample_ledger();
    assert!(commands::cmd_trend(&ledger, 6, false).is_ok());
    assert!(commands::cmd_trend(&ledger, 12, true).is_ok());
    assert!(commands::cmd_trend(&ledger, 0, false).is_ok());
}

#[test]
fn test_cmd_breakdown() {
    let (_file, ledger) = sample_ledger();
    assert!(commands::cmd_breakdown(&ledger, 8, false).is_ok());
    assert!(commands::cmd_breakdown(&ledger, 1, true).is_ok());
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export() {
    let (_file, ledger) = sample_ledger();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.csv");

    commands::cmd_export(&ledger, Some(&output)).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("Date,Type,Category,Description,Amount (₹)\n"));
    assert!(written.contains("\"Market, weekly\""));

    let reloaded = load_transactions(&output).unwrap();
    assert_eq!(reloaded.len(), ledger.transactions.len());
    assert_eq!(reloaded[2].description, "Market, weekly");
}

#[test]
fn test_export_default_path() {
    let (_file, ledger) = sample_ledger();
    assert_eq!(
        commands::export_path(&ledger, None),
        Path::new("transactions_2026-10-16.csv")
    );
    assert_eq!(
        commands::export_path(&ledger, Some(Path::new("backup.csv"))),
        Path::new("backup.csv")
    );
}

#[test]
fn test_cmd_export_unwritable() {
    let (_file, ledger) = sample_ledger();
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing").join("out.csv");

    assert!(commands::cmd_export(&ledger, Some(&output)).is_err());
}

#[test]
fn test_cmd_categories() {
    assert!(commands::cmd_categories(false).is_ok());
    assert!(commands::cmd_categories(true).is_ok());
}

// ========== JSON Input Tests ==========

#[test]
fn test_open_ledger_json() {
    let file = write_sample(
        ".json",
        r#"[{"amount": 1200, "category": "Food & Dining", "date": "2026-10-02T09:30:00Z", "type": "expense"}]"#,
    );
    let ledger = commands::open_ledger(file.path(), Some("2026-10-16"), None).unwrap();

    assert_eq!(ledger.transactions.len(), 1);
    assert!(!ledger.transactions[0].id.is_empty());
    assert!(commands::cmd_predict(&ledger, false).is_ok());
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from(["fintrack", "predict"]).unwrap();

    assert_eq!(cli.file, Path::new("transactions.csv"));
    assert!(cli.as_of.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.json);
    assert!(!cli.verbose);
    assert!(matches!(cli.command, Commands::Predict));
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "fintrack",
        "breakdown",
        "--limit",
        "3",
        "--file",
        "data.json",
        "--as-of",
        "2026-01-31",
        "--json",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.file, Path::new("data.json"));
    assert_eq!(cli.as_of.as_deref(), Some("2026-01-31"));
    assert!(cli.json);
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Breakdown { limit: 3 }));
}

#[test]
fn test_cli_subcommand_defaults() {
    let cli = Cli::try_parse_from(["fintrack", "trend"]).unwrap();
    assert!(matches!(cli.command, Commands::Trend { months: 6 }));

    let cli = Cli::try_parse_from(["fintrack", "breakdown"]).unwrap();
    assert!(matches!(cli.command, Commands::Breakdown { limit: 8 }));

    let cli = Cli::try_parse_from(["fintrack", "export"]).unwrap();
    assert!(matches!(cli.command, Commands::Export { output: None }));
}

#[test]
fn test_cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["fintrack", "serve"]).is_err());
}

// ========== Dispatch Tests ==========

#[test]
fn test_run_categories_without_transactions_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");
    let cli = Cli::try_parse_from([
        "fintrack",
        "categories",
        "--file",
        missing.to_str().unwrap(),
    ])
    .unwrap();

    assert!(run(&cli).is_ok());
}

#[test]
fn test_run_predict_loads_transactions_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");
    let cli = Cli::try_parse_from(["fintrack", "predict", "--file", missing.to_str().unwrap()])
        .unwrap();
    assert!(run(&cli).is_err());

    let file = write_sample(".csv", SAMPLE_CSV);
    let cli = Cli::try_parse_from([
        "fintrack",
        "summary",
        "--as-of",
        "2026-10-16",
        "--file",
        file.path().to_str().unwrap(),
    ])
    .unwrap();
    assert!(run(&cli).is_ok());
}
