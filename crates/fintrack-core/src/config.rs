//! Forecaster configuration
//!
//! Tunables for the forecasting pipeline (window length, weights, thresholds).
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Explicit path, or the override in the data dir
//!    (~/.local/share/fintrack/config/forecast.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/forecast.toml");

/// Forecasting parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Number of calendar months in the history window
    pub window_months: usize,
    /// Moving-average window used for trend detection
    pub smoothing_window: usize,
    /// Slope magnitude that separates a trend from noise
    pub slope_threshold: f64,
    /// How many of the latest months feed the weighted prediction
    pub recent_months: usize,
    /// Recency weights, earliest month first
    pub weights: Vec<f64>,
    /// Weight for slice positions past the end of `weights`
    pub fallback_weight: f64,
    pub increase_factor: f64,
    pub decrease_factor: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
    /// Confidence when only one month has spending
    pub single_month_confidence: f64,
    /// Confidence when no month has spending
    pub no_data_confidence: f64,
    /// Month-over-month percent change that counts as a trend
    pub change_threshold_percent: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window_months: 6,
            smoothing_window: 3,
            slope_threshold: 0.1,
            recent_months: 5,
            weights: vec![0.1, 0.15, 0.2, 0.25, 0.3],
            fallback_weight: 0.2,
            increase_factor: 1.1,
            decrease_factor: 0.9,
            min_confidence: 0.1,
            max_confidence: 0.9,
            single_month_confidence: 0.3,
            no_data_confidence: 0.1,
            change_threshold_percent: 5.0,
        }
    }
}

impl ForecastConfig {
    /// Load config from an explicit path, the data dir override, or the embedded defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) if path.exists() => read_config(path)?,
            Some(path) => {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
                DEFAULT_CONFIG.to_string()
            }
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => read_config(&default_path)?,
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.window_months == 0 {
            return Err(Error::Config("window.months must be at least 1".into()));
        }
        if self.smoothing_window == 0 {
            return Err(Error::Config("window.smoothing must be at least 1".into()));
        }
        if self.recent_months == 0 {
            return Err(Error::Config("weights.months must be at least 1".into()));
        }
        if self.weights.is_empty() {
            return Err(Error::Config("weights.recent must not be empty".into()));
        }

        let scalars = [
            ("trend.slope_threshold", self.slope_threshold),
            ("trend.increase_factor", self.increase_factor),
            ("trend.decrease_factor", self.decrease_factor),
            ("trend.change_threshold_percent", self.change_threshold_percent),
            ("weights.fallback", self.fallback_weight),
            ("confidence.min", self.min_confidence),
            ("confidence.max", self.max_confidence),
            ("confidence.single_month", self.single_month_confidence),
            ("confidence.no_data", self.no_data_confidence),
        ];
        for (key, value) in scalars {
            if !value.is_finite() {
                return Err(Error::Config(format!("{} must be a finite number", key)));
            }
        }

        if self.weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::Config(
                "weights.recent must be finite and non-negative".into(),
            ));
        }
        if self.fallback_weight < 0.0 {
            return Err(Error::Config("weights.fallback must not be negative".into()));
        }
        if self.weights.iter().sum::<f64>() <= 0.0 {
            return Err(Error::Config("weights.recent must sum to more than 0".into()));
        }
        if self.increase_factor < 0.0 || self.decrease_factor < 0.0 {
            return Err(Error::Config("trend factors must not be negative".into()));
        }

        for (key, value) in [
            ("confidence.min", self.min_confidence),
            ("confidence.max", self.max_confidence),
            ("confidence.single_month", self.single_month_confidence),
            ("confidence.no_data", self.no_data_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!("{} must be between 0 and 1", key)));
            }
        }
        if self.min_confidence > self.max_confidence {
            return Err(Error::Config(format!(
                "confidence.min ({}) exceeds confidence.max ({})",
                self.min_confidence, self.max_confidence
            )));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("fintrack").join("config").join("forecast.toml"))
}

fn read_config(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "Loading forecast config");
    fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    window: Option<RawWindow>,
    trend: Option<RawTrend>,
    weights: Option<RawWeights>,
    confidence: Option<RawConfidence>,
}

#[derive(Debug, Deserialize)]
struct RawWindow {
    months: Option<usize>,
    smoothing: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawTrend {
    slope_threshold: Option<f64>,
    increase_factor: Option<f64>,
    decrease_factor: Option<f64>,
    change_threshold_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawWeights {
    months: Option<usize>,
    recent: Option<Vec<f64>>,
    fallback: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawConfidence {
    min: Option<f64>,
    max: Option<f64>,
    single_month: Option<f64>,
    no_data: Option<f64>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<ForecastConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = ForecastConfig::default();

    if let Some(window) = raw.window {
        if let Some(months) = window.months {
            config.window_months = months;
        }
        if let Some(smoothing) = window.smoothing {
            config.smoothing_window = smoothing;
        }
    }

    if let Some(trend) = raw.trend {
        if let Some(threshold) = trend.slope_threshold {
            config.slope_threshold = threshold;
        }
        if let Some(factor) = trend.increase_factor {
            config.increase_factor = factor;
        }
        if let Some(factor) = trend.decrease_factor {
            config.decrease_factor = factor;
        }
        if let Some(threshold) = trend.change_threshold_percent {
            config.change_threshold_percent = threshold;
        }
    }

    if let Some(weights) = raw.weights {
        if let Some(months) = weights.months {
            config.recent_months = months;
        }
        if let Some(recent) = weights.recent {
            config.weights = recent;
        }
        if let Some(fallback) = weights.fallback {
            config.fallback_weight = fallback;
        }
    }

    if let Some(confidence) = raw.confidence {
        if let Some(min) = confidence.min {
            config.min_confidence = min;
        }
        if let Some(max) = confidence.max {
            config.max_confidence = max;
        }
        if let Some(single) = confidence.single_month {
            config.single_month_confidence = single;
        }
        if let Some(none) = confidence.no_data {
            config.no_data_confidence = none;
        }
    }

    config.validate()?;
    Ok(config)
}
