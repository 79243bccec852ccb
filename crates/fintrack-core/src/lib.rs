//! Fintrack Core Library
//!
//! Shared functionality for the Fintrack personal finance tracker:
//! - Next-month spending forecasts per category, with trend and confidence
//! - Month-over-month spending analysis
//! - Monthly summaries, expense trends and category breakdowns
//! - Built-in category catalogue with icons
//! - CSV/JSON transaction import and CSV export
//! - Forecaster configuration with file overrides

pub mod categories;
pub mod config;
pub mod error;
pub mod export;
pub mod forecast;
pub mod import;
pub mod models;
pub mod reports;

pub use config::ForecastConfig;
pub use error::{Error, Result};
pub use forecast::{Forecaster, Prediction, SpendingAnalysis, Trend};
pub use models::{CategoryData, MonthlySummary, MonthlyTotal, Transaction, TransactionType};
