//! Export and category catalogue commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fintrack_core::categories::{category_icon, categories_for};
use fintrack_core::export::{default_export_filename, export_transactions_csv};
use fintrack_core::TransactionType;
use serde::Serialize;

use super::{print_json, Ledger};

/// Write all transactions to a CSV file
pub fn cmd_export(ledger: &Ledger, output: Option<&Path>) -> Result<()> {
    let path = export_path(ledger, output);
    let csv = export_transactions_csv(&ledger.transactions);

    std::fs::write(&path, csv)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        count = ledger.transactions.len(),
        "Exported transactions"
    );
    println!(
        "✅ Exported {} transactions to {}",
        ledger.transactions.len(),
        path.display()
    );

    Ok(())
}

/// `--output` if given, else `transactions_<date>.csv` in the working directory
pub fn export_path(ledger: &Ledger, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_export_filename(ledger.today)))
}

#[derive(Serialize)]
struct CatalogueEntry {
    name: &'static str,
    icon: &'static str,
    #[serde(rename = "type")]
    kind: TransactionType,
}

pub fn cmd_categories(json: bool) -> Result<()> {
    let kinds = [TransactionType::Expense, TransactionType::Income];

    if json {
        let entries: Vec<CatalogueEntry> = kinds
            .iter()
            .flat_map(|kind| {
                categories_for(*kind).into_iter().map(|name| CatalogueEntry {
                    name,
                    icon: category_icon(name),
                    kind: *kind,
                })
            })
            .collect();
        return print_json(&entries);
    }

    for kind in kinds {
        let heading = match kind {
            TransactionType::Expense => "💸 Expense Categories",
            TransactionType::Income => "💰 Income Categories",
        };
        println!();
        println!("{}", heading);
        println!("   ─────────────────────────────");
        for name in categories_for(kind) {
            println!("   {} {}", category_icon(name), name);
        }
    }

    Ok(())
}
