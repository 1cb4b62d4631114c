use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub forecast: ForecastConfig,
    pub output: OutputConfig,
}

/// Synthetic data generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub seed: u64,
    pub start_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub strategy: StrategyPreference,
    pub default_months: u32,
    pub holt_winters: HoltWintersConfig,
}

/// Smoothing constants for the additive Holt-Winters strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoltWintersConfig {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub season_length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub predictions_file: String,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            forecast: ForecastConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyPreference::Auto,
            default_months: 3,
            holt_winters: HoltWintersConfig::default(),
        }
    }
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.05,
            gamma: 0.2,
            season_length: 7,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            predictions_file: "predictions.csv".to_string(),
            format: OutputFormat::Text,
        }
    }
}

/// Raised when a config or CLI option string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{value}'. Valid values: {expected}")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Which forecasting strategy the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyPreference {
    /// Time-series model when compiled in, linear regression otherwise
    #[default]
    Auto,
    HoltWinters,
    Linear,
}

impl FromStr for StrategyPreference {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "holt-winters" | "holt_winters" | "timeseries" => Ok(Self::HoltWinters),
            "linear" | "regression" => Ok(Self::Linear),
            _ => Err(ParseOptionError {
                kind: "strategy",
                value: s.to_string(),
                expected: "auto, holt-winters, linear",
            }),
        }
    }
}

impl fmt::Display for StrategyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::HoltWinters => write!(f, "holt-winters"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ParseOptionError {
                kind: "output format",
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
