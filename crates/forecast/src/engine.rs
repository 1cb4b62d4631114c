use crate::selector::StrategyKind;
use bizdash_analytics::daily_series;
use bizdash_core::config::{ForecastConfig, HoltWintersConfig};
use bizdash_core::error::{ForecastError, MIN_FORECAST_DAYS};
use bizdash_core::records::{horizon_days, Dataset};
use bizdash_core::series::{DailyTotals, DatedValue, ForecastResult, ForecastRow};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Turns a dataset into a sales/revenue forecast with one fixed strategy.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    kind: StrategyKind,
    holt_winters: HoltWintersConfig,
}

impl ForecastEngine {
    /// Detects the compiled-in strategies and fixes the strategy for this engine's lifetime.
    #[must_use]
    pub fn new(config: &ForecastConfig) -> Self {
        let kind = StrategyKind::detect(config.strategy);
        tracing::info!(strategy = kind.name(), "forecast strategy selected");
        Self::with_strategy(kind, config.holt_winters)
    }

    #[must_use]
    pub const fn with_strategy(kind: StrategyKind, holt_winters: HoltWintersConfig) -> Self {
        Self { kind, holt_winters }
    }

    #[must_use]
    pub const fn strategy(&self) -> StrategyKind {
        self.kind
    }

    /// Forecasts daily sales and revenue for `months_ahead * 30` days past the
    /// last observed date.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InsufficientData`] when the dataset spans fewer
    /// than two days, or any error raised by the strategy.
    #[allow(clippy::cast_precision_loss)]
    pub fn forecast(
        &self,
        dataset: &Dataset,
        months_ahead: u32,
    ) -> Result<ForecastResult, ForecastError> {
        let horizon = horizon_days(months_ahead);
        let daily = daily_series(dataset);
        let last_observed = match daily.last() {
            Some(last) if daily.len() >= MIN_FORECAST_DAYS => last.date,
            _ => {
                return Err(ForecastError::InsufficientData {
                    days: daily.len(),
                    required: MIN_FORECAST_DAYS,
                })
            }
        };

        let sales = univariate(&daily, |d| d.sales as f64);
        let revenue = univariate(&daily, |d| d.revenue);

        let predicted_sales = self.fit_predict(&sales, horizon)?;
        let predicted_revenue = self.fit_predict(&revenue, horizon)?;
        let rows = align_tail(predicted_sales, predicted_revenue, horizon);
        check_horizon(&rows, last_observed, horizon)?;

        tracing::info!(
            strategy = self.kind.name(),
            observed_days = daily.len(),
            horizon,
            "forecast complete"
        );
        Ok(ForecastResult {
            strategy: self.kind.name().to_string(),
            horizon_days: horizon,
            rows,
        })
    }

    fn fit_predict(
        &self,
        series: &[DatedValue],
        horizon: usize,
    ) -> Result<Vec<DatedValue>, ForecastError> {
        let mut model = self.kind.build(&self.holt_winters);
        model.fit(series)?;
        model.predict_future(horizon)
    }
}

fn univariate(daily: &[DailyTotals], value: impl Fn(&DailyTotals) -> f64) -> Vec<DatedValue> {
    daily
        .iter()
        .map(|d| DatedValue::new(d.date, value(d)))
        .collect()
}

/// Joins two predictions on date and keeps the trailing `horizon` rows.
fn align_tail(
    sales: Vec<DatedValue>,
    revenue: Vec<DatedValue>,
    horizon: usize,
) -> Vec<ForecastRow> {
    let revenue: BTreeMap<NaiveDate, f64> =
        revenue.into_iter().map(|p| (p.date, p.value)).collect();
    let sales: BTreeMap<NaiveDate, f64> = sales.into_iter().map(|p| (p.date, p.value)).collect();

    let joined: Vec<ForecastRow> = sales
        .into_iter()
        .filter_map(|(date, predicted_sales)| {
            revenue.get(&date).map(|&predicted_revenue| ForecastRow {
                date,
                predicted_sales,
                predicted_revenue,
            })
        })
        .collect();

    let skip = joined.len().saturating_sub(horizon);
    joined.into_iter().skip(skip).collect()
}

fn check_horizon(
    rows: &[ForecastRow],
    last_observed: NaiveDate,
    horizon: usize,
) -> Result<(), ForecastError> {
    let consecutive = last_observed
        .iter_days()
        .skip(1)
        .zip(rows)
        .all(|(expected, row)| row.date == expected);

    if rows.len() == horizon && consecutive {
        Ok(())
    } else {
        Err(ForecastError::Misaligned {
            expected: horizon,
            actual: rows.len(),
        })
    }
}
