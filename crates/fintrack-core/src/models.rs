//! Domain models for Fintrack

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logged income or expense entry
///
/// Amounts are always non-negative; the direction lives in `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        kind: TransactionType,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            category: category.into(),
            description: String::new(),
            date,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// True if the transaction falls within the inclusive date range
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}

/// Income and expense totals for a single calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// First day of the month
    pub month: NaiveDate,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    /// Share of income kept, as a percentage (0 when there is no income)
    pub savings_rate: f64,
}

/// Total expenses for one month of a trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// First day of the month
    pub month: NaiveDate,
    /// Display label, e.g. "Oct 2026"
    pub label: String,
    pub amount: f64,
}

impl MonthlyTotal {
    pub fn new(month: NaiveDate, amount: f64) -> Self {
        Self {
            month,
            label: month.format("%b %Y").to_string(),
            amount,
        }
    }
}

/// A category's share of a month's expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    pub category: String,
    pub amount: f64,
    pub count: usize,
    pub percentage: f64,
}
