//! Forecaster - next-month spending predictions
//!
//! Turns a list of dated transactions into per-category predictions with a
//! trend and a confidence score, plus a month-over-month spending comparison.
//! Everything runs in memory over a borrowed snapshot; calling it again on the
//! same input and reference date gives the same output.
//!
//! ## Pipeline
//!
//! 1. **Monthly aggregation** - expense totals per category for the last six months
//! 2. **Smoothing** - trailing three-month moving average
//! 3. **Trend** - sign of the least squares slope of the smoothed series
//! 4. **Prediction** - recency-weighted average, adjusted by the trend
//! 5. **Confidence** - one minus the coefficient of variation, clamped
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fintrack_core::forecast::Forecaster;
//!
//! let forecaster = Forecaster::new(&transactions);
//! let predictions = forecaster.predict_next_month_expenses();
//! let analysis = forecaster.analyze_spending_patterns();
//! ```

pub mod forecaster;
pub mod monthly;
pub mod stats;
pub mod types;

pub use forecaster::{predict_category, Forecaster};
pub use monthly::{month_bounds, monthly_spending, shift_months, MonthlyBuckets};
pub use stats::{
    calculate_trend, coefficient_of_variation, linear_slope, moving_average,
    weighted_recent_average,
};
pub use types::{Prediction, SpendingAnalysis, Trend};
