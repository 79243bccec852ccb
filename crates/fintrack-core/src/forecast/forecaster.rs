//! Next-month expense forecaster
//!
//! Predicts each category's spending for next month from its last six months:
//! - Trailing moving average, then regression slope for the trend
//! - Recency-weighted average, nudged up or down by the trend
//! - Confidence from how much the monthly totals vary

use chrono::NaiveDate;

use crate::config::ForecastConfig;
use crate::models::Transaction;

use super::monthly::{self, MonthlyBuckets};
use super::stats;
use super::types::{Prediction, SpendingAnalysis, Trend};

/// Forecasts spending from a borrowed snapshot of transactions
pub struct Forecaster<'a> {
    transactions: &'a [Transaction],
    /// Reference date; its month is the newest month of the window
    today: NaiveDate,
    config: ForecastConfig,
}

impl<'a> Forecaster<'a> {
    /// Create a forecaster anchored at today's local date
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self::with_reference_date(transactions, chrono::Local::now().date_naive())
    }

    /// Create a forecaster anchored at an explicit date
    pub fn with_reference_date(transactions: &'a [Transaction], today: NaiveDate) -> Self {
        Self {
            transactions,
            today,
            config: ForecastConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ForecastConfig) -> Self {
        self.config = config;
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Expense totals per category for each month of the window, oldest first
    pub fn monthly_spending(&self) -> MonthlyBuckets {
        monthly::monthly_spending(self.transactions, self.today, self.config.window_months)
    }

    /// Predict next month's spending for every category seen in the window
    ///
    /// Sorted by predicted amount, largest first; equal amounts by category name.
    pub fn predict_next_month_expenses(&self) -> Vec<Prediction> {
        let mut predictions: Vec<Prediction> = self
            .monthly_spending()
            .into_iter()
            .map(|(category, amounts)| predict_category(category, &amounts, &self.config))
            .collect();

        predictions.sort_by(|a, b| {
            b.predicted_amount
                .cmp(&a.predicted_amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        tracing::debug!(
            predictions = predictions.len(),
            as_of = %self.today,
            "Forecast complete"
        );

        predictions
    }

    /// Compare this month's expenses with last month's
    pub fn analyze_spending_patterns(&self) -> SpendingAnalysis {
        let (current_start, current_end) = monthly::month_bounds(self.today);
        let (last_start, last_end) = monthly::month_bounds(monthly::shift_months(self.today, -1));

        let current_month_expenses =
            monthly::expense_total(self.transactions, current_start, current_end);
        let last_month_expenses = monthly::expense_total(self.transactions, last_start, last_end);

        let change_percent = if last_month_expenses > 0.0 {
            (current_month_expenses - last_month_expenses) / last_month_expenses * 100.0
        } else {
            0.0
        };

        SpendingAnalysis {
            current_month_expenses,
            last_month_expenses,
            change_percent: stats::round_to(change_percent, 2),
            trend: Trend::from_threshold(change_percent, self.config.change_threshold_percent),
        }
    }
}

/// Predict one category from its monthly totals (oldest first)
pub fn predict_category(
    category: impl Into<String>,
    amounts: &[f64],
    config: &ForecastConfig,
) -> Prediction {
    let category = category.into();
    let non_zero: Vec<f64> = amounts.iter().copied().filter(|v| *v > 0.0).collect();

    if non_zero.len() < 2 {
        let confidence = if non_zero.is_empty() {
            config.no_data_confidence
        } else {
            config.single_month_confidence
        };
        return Prediction {
            category,
            predicted_amount: to_currency_units(stats::mean(&non_zero)),
            confidence,
            trend: Trend::Stable,
        };
    }

    let smoothed = stats::moving_average(amounts, config.smoothing_window);
    let trend = stats::calculate_trend(&smoothed, config.slope_threshold);

    let weighted = stats::weighted_recent_average(
        amounts,
        config.recent_months,
        &config.weights,
        config.fallback_weight,
    )
    .unwrap_or(0.0);
    let prediction = weighted * trend.adjustment(config.increase_factor, config.decrease_factor);

    let cv = stats::coefficient_of_variation(amounts);
    let confidence = (1.0 - cv).clamp(config.min_confidence, config.max_confidence);

    Prediction {
        category,
        predicted_amount: to_currency_units(prediction),
        confidence: stats::round_to(confidence, 2),
        trend,
    }
}

/// Round to whole currency units, flooring negatives at zero
fn to_currency_units(amount: f64) -> u64 {
    amount.max(0.0).round() as u64
}
