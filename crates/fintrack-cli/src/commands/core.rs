//! Shared command utilities
//!
//! This module contains:
//! - `Ledger` - Loaded transactions plus the reference date and forecaster config
//! - `open_ledger` - Load everything a command needs from the global flags
//! - `resolve_as_of` - Parse the `--as-of` date
//! - `print_json` - Pretty JSON output for `--json`

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use fintrack_core::{import::load_transactions, ForecastConfig, Forecaster, Transaction};
use serde::Serialize;

/// Transactions loaded for a single command run
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub today: NaiveDate,
    pub config: ForecastConfig,
}

impl Ledger {
    pub fn forecaster(&self) -> Forecaster<'_> {
        Forecaster::with_reference_date(&self.transactions, self.today)
            .with_config(self.config.clone())
    }
}

/// Load transactions, the reference date and the forecaster config
pub fn open_ledger(file: &Path, as_of: Option<&str>, config: Option<&Path>) -> Result<Ledger> {
    let today = resolve_as_of(as_of)?;
    let config = ForecastConfig::load(config).context("Failed to load forecaster config")?;
    let transactions = load_transactions(file)
        .with_context(|| format!("Failed to load transactions from {}", file.display()))?;

    tracing::debug!(
        file = %file.display(),
        count = transactions.len(),
        %today,
        "Ledger ready"
    );

    Ok(Ledger {
        transactions,
        today,
        config,
    })
}

/// Parse `--as-of`, defaulting to the local date
pub fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDate> {
    match as_of {
        Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .context("Invalid --as-of date format (use YYYY-MM-DD)"),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize output")?
    );
    Ok(())
}
