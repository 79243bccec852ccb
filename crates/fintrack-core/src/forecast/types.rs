//! Core types for the forecaster

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a series over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }

    /// Multiplier applied to a prediction for this trend
    pub fn adjustment(&self, increase: f64, decrease: f64) -> f64 {
        match self {
            Trend::Increasing => increase,
            Trend::Decreasing => decrease,
            Trend::Stable => 1.0,
        }
    }

    /// Classify a signed value against a symmetric threshold
    pub fn from_threshold(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Trend::Increasing
        } else if value < -threshold {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increasing" => Ok(Trend::Increasing),
            "decreasing" => Ok(Trend::Decreasing),
            "stable" => Ok(Trend::Stable),
            _ => Err(format!("Unknown trend: {}", s)),
        }
    }
}

/// Next-month spending forecast for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: String,
    /// Whole currency units, never negative
    pub predicted_amount: u64,
    /// Reliability score in [0, 1], two decimals
    pub confidence: f64,
    pub trend: Trend,
}

/// Current month vs. previous month expense comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingAnalysis {
    pub current_month_expenses: f64,
    pub last_month_expenses: f64,
    /// Percent change from last month, two decimals (0 when last month is 0)
    pub change_percent: f64,
    pub trend: Trend,
}

impl Default for SpendingAnalysis {
    fn default() -> Self {
        Self {
            current_month_expenses: 0.0,
            last_month_expenses: 0.0,
            change_percent: 0.0,
            trend: Trend::Stable,
        }
    }
}
