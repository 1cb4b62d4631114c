//! Derived tables produced by aggregation and forecasting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column sums over a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub sales: u64,
    pub revenue: f64,
    pub profit: f64,
}

/// Sales summed over one calendar month, keyed by the month's last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySales {
    #[serde(rename = "Date")]
    pub month_end: NaiveDate,
    #[serde(rename = "Sales")]
    pub sales: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Cumulative Revenue")]
    pub cumulative_revenue: f64,
}

/// Sales and revenue summed over one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub sales: u64,
    pub revenue: f64,
}

/// A single observation or prediction of a univariate daily series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

impl DatedValue {
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Predicted Sales")]
    pub predicted_sales: f64,
    #[serde(rename = "Predicted Revenue")]
    pub predicted_revenue: f64,
}

/// Predictions for exactly `horizon_days` consecutive future days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Name of the strategy that produced the rows.
    pub strategy: String,
    pub horizon_days: usize,
    pub rows: Vec<ForecastRow>,
}

impl ForecastResult {
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }
}

/// Everything the dashboard page renders for one region selection.
///
/// Totals cover the full dataset; the chart series cover the selected region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub region_options: Vec<String>,
    pub selected_region: String,
    pub totals: Totals,
    pub monthly_sales: Vec<MonthlySales>,
    pub category_revenue: BTreeMap<String, f64>,
    pub cumulative_revenue: Vec<CumulativePoint>,
}
