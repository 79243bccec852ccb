//! Transaction import from CSV and JSON files
//!
//! Both formats carry the same fields: date, type, category, description and
//! amount, plus an optional id. Rows are validated here so the forecaster can
//! trust its input: amounts must be finite and non-negative, categories
//! non-empty and the type either `income` or `expense`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::categories;
use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Load transactions from a `.csv` or `.json` file
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let file = BufReader::new(File::open(path)?);
    let transactions = match extension.as_deref() {
        Some("csv") => parse_csv(file)?,
        Some("json") => parse_json(file)?,
        _ => {
            return Err(Error::Import(format!(
                "Unsupported file type: {} (expected .csv or .json)",
                path.display()
            )))
        }
    };

    debug!(
        path = %path.display(),
        count = transactions.len(),
        "Loaded transactions"
    );
    Ok(transactions)
}

/// Column positions resolved from a CSV header
struct Columns {
    id: Option<usize>,
    date: usize,
    kind: usize,
    category: usize,
    description: Option<usize>,
    amount: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().to_lowercase().starts_with(wanted))
        };
        let require = |wanted: &str| {
            find(wanted).ok_or_else(|| Error::Import(format!("Missing column: {}", wanted)))
        };

        Ok(Self {
            id: headers.iter().position(|h| h.trim().eq_ignore_ascii_case("id")),
            date: require("date")?,
            kind: require("type")?,
            category: require("category")?,
            description: find("description"),
            // Matches "Amount" as well as "Amount (₹)"
            amount: require("amount")?,
        })
    }
}

/// Parse CSV data with a `Date,Type,Category,Description,Amount` header
///
/// Column order is free; `Description` and `Id` are optional.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;
        let field = |i: usize| record.get(i).unwrap_or("");

        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        let row = RowFields {
            id: columns.id.map(field),
            date: field(columns.date),
            kind: field(columns.kind),
            category: field(columns.category),
            description: columns.description.map(field).unwrap_or(""),
        };
        let amount = parse_amount(field(columns.amount))
            .map_err(|e| Error::Import(format!("Row {}: {}", line, e)))?;

        transactions.push(
            row.into_transaction(amount)
                .map_err(|e| Error::Import(format!("Row {}: {}", line, e)))?,
        );
    }

    Ok(transactions)
}

/// Raw JSON record before validation
#[derive(Debug, Deserialize)]
struct RawTransaction {
    id: Option<String>,
    amount: f64,
    category: String,
    #[serde(default)]
    description: Option<String>,
    date: String,
    #[serde(rename = "type")]
    kind: String,
}

/// Parse a JSON array of transaction objects
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let raw: Vec<RawTransaction> = serde_json::from_reader(reader)?;

    raw.iter()
        .enumerate()
        .map(|(index, r)| {
            let row = RowFields {
                id: r.id.as_deref(),
                date: &r.date,
                kind: &r.kind,
                category: &r.category,
                description: r.description.as_deref().unwrap_or(""),
            };
            row.into_transaction(r.amount)
                .map_err(|e| Error::Import(format!("Record {}: {}", index + 1, e)))
        })
        .collect()
}

/// String fields shared by both formats
struct RowFields<'a> {
    id: Option<&'a str>,
    date: &'a str,
    kind: &'a str,
    category: &'a str,
    description: &'a str,
}

impl RowFields<'_> {
    fn into_transaction(self, amount: f64) -> std::result::Result<Transaction, String> {
        let date = parse_date(self.date)?;
        let kind: TransactionType = self.kind.parse()?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err("Missing category".to_string());
        }
        if !amount.is_finite() {
            return Err(format!("Invalid amount: {}", amount));
        }
        if amount < 0.0 {
            return Err(format!("Negative amount: {}", amount));
        }
        if !categories::is_known_category(category, kind) {
            debug!(category, kind = %kind, "Custom category");
        }

        let description = self.description.trim();
        let id = match self.id.map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => id.to_string(),
            None => generate_id(&date, kind, category, description, amount),
        };

        Ok(Transaction {
            id,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date,
            kind,
        })
    }
}

/// Deterministic id for records that arrive without one
fn generate_id(
    date: &NaiveDate,
    kind: TransactionType,
    category: &str,
    description: &str,
    amount: f64,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(date.to_string().as_bytes());
    hasher.update(kind.as_str().as_bytes());
    hasher.update(category.as_bytes());
    hasher.update(description.as_bytes());
    hasher.update(amount.to_be_bytes());
    hex::encode(hasher.finalize())
}

/// Parse an ISO-8601 date, ignoring any time of day
fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    let s = s.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.date_naive());
    }

    // Date with an unzoned time part, e.g. 2026-01-15T09:30:00
    let date_part = s.split(['T', ' ']).next().unwrap_or(s);

    let formats = [
        "%Y-%m-%d", // 2026-01-15
        "%Y/%m/%d", // 2026/01/15
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, fmt) {
            return Ok(date);
        }
    }

    Err(format!("Unable to parse date: {}", s))
}

/// Parse an amount string, handling currency symbols and thousands separators
fn parse_amount(s: &str) -> std::result::Result<f64, String> {
    let cleaned: String = s
        .trim()
        .replace(['₹', '$', ',', ' '], "");

    cleaned
        .parse::<f64>()
        .map_err(|_| format!("Unable to parse amount: {}", s))
}
