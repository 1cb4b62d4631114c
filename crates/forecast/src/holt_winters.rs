//! Additive Holt-Winters (triple exponential smoothing) on daily data.
//!
//! Model equations, with season length `m`:
//! - Level: `l_t = α(y_t - s_{t-m}) + (1-α)(l_{t-1} + b_{t-1})`
//! - Trend: `b_t = β(l_t - l_{t-1}) + (1-β)b_{t-1}`
//! - Seasonal: `s_t = γ(y_t - l_t) + (1-γ)s_{t-m}`
//! - Forecast: `ŷ_{t+h} = l_t + h*b_t + s_{t+h-m}`
//!
//! Series shorter than two full seasons are fitted without the seasonal term.

use bizdash_core::config::HoltWintersConfig;
use bizdash_core::error::{ForecastError, MIN_FORECAST_DAYS};
use bizdash_core::series::DatedValue;
use bizdash_core::traits::Forecaster;
use chrono::NaiveDate;

const MIN_SMOOTHING: f64 = 0.0001;
const MAX_SMOOTHING: f64 = 0.9999;

#[derive(Debug, Clone)]
struct FittedState {
    start: NaiveDate,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
    fitted: Vec<f64>,
}

impl FittedState {
    fn period(&self) -> usize {
        self.seasonals.len()
    }

    #[allow(clippy::cast_precision_loss)]
    fn forecast(&self, steps_ahead: usize) -> f64 {
        let n = self.fitted.len();
        let season = self.seasonals[(n + steps_ahead - 1) % self.period()];
        self.level + steps_ahead as f64 * self.trend + season
    }
}

#[derive(Debug, Clone)]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
    state: Option<FittedState>,
}

impl HoltWinters {
    pub const NAME: &'static str = "Holt-Winters";

    #[must_use]
    pub fn new(config: &HoltWintersConfig) -> Self {
        Self {
            alpha: config.alpha.clamp(MIN_SMOOTHING, MAX_SMOOTHING),
            beta: config.beta.clamp(MIN_SMOOTHING, MAX_SMOOTHING),
            gamma: config.gamma.clamp(MIN_SMOOTHING, MAX_SMOOTHING),
            season_length: config.season_length.max(1),
            state: None,
        }
    }

    /// Whether the last fit used the seasonal term.
    #[must_use]
    pub fn is_seasonal(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.period() > 1)
    }

    /// In-sample one-step-ahead fitted values from the last fit.
    #[must_use]
    pub fn fitted_values(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.fitted.as_slice())
    }

    /// Initial level, trend, and seasonal indices, positioned just before `y[0]`.
    #[allow(clippy::cast_precision_loss)]
    fn initial_state(&self, y: &[f64]) -> (f64, f64, Vec<f64>) {
        let m = self.season_length;
        if m > 1 && y.len() >= 2 * m {
            let first_mean = mean(&y[..m]);
            let second_mean = mean(&y[m..2 * m]);
            let trend = (second_mean - first_mean) / m as f64;
            let seasonals = y[..m].iter().map(|v| v - first_mean).collect();
            (first_mean - trend * (m as f64 + 1.0) / 2.0, trend, seasonals)
        } else {
            let trend = y[1] - y[0];
            (y[0] - trend, trend, vec![0.0])
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

impl Forecaster for HoltWinters {
    fn fit(&mut self, series: &[DatedValue]) -> Result<(), ForecastError> {
        let Some(first) = series.first().filter(|_| series.len() >= MIN_FORECAST_DAYS) else {
            return Err(ForecastError::InsufficientData {
                days: series.len(),
                required: MIN_FORECAST_DAYS,
            });
        };

        let y: Vec<f64> = series.iter().map(|p| p.value).collect();
        let (mut level, mut trend, mut seasonals) = self.initial_state(&y);
        let period = seasonals.len();
        let mut fitted = Vec::with_capacity(y.len());

        for (t, &value) in y.iter().enumerate() {
            let idx = t % period;
            let season = seasonals[idx];
            fitted.push(level + trend + season);

            let prev_level = level;
            level = self.alpha * (value - season) + (1.0 - self.alpha) * (level + trend);
            trend = self.beta * (level - prev_level) + (1.0 - self.beta) * trend;
            if period > 1 {
                seasonals[idx] = self.gamma * (value - level) + (1.0 - self.gamma) * season;
            }
        }

        if !level.is_finite() || !trend.is_finite() {
            return Err(ForecastError::NonFinite { model: Self::NAME });
        }

        tracing::debug!(
            level,
            trend,
            period,
            n = y.len(),
            "fitted holt-winters state"
        );
        self.state = Some(FittedState {
            start: first.date,
            level,
            trend,
            seasonals,
            fitted,
        });
        Ok(())
    }

    /// Returns in-sample fitted values followed by `horizon_days` forecasts,
    /// covering every day from the series start.
    fn predict_future(&self, horizon_days: usize) -> Result<Vec<DatedValue>, ForecastError> {
        let state = self
            .state
            .as_ref()
            .ok_or(ForecastError::NotFitted { model: Self::NAME })?;

        let in_sample = state.fitted.iter().copied();
        let out_of_sample = (1..=horizon_days).map(|h| state.forecast(h));
        let values: Vec<DatedValue> = state
            .start
            .iter_days()
            .zip(in_sample.chain(out_of_sample))
            .map(|(date, value)| DatedValue::new(date, value))
            .collect();

        if values.iter().any(|p| !p.value.is_finite()) {
            return Err(ForecastError::NonFinite { model: Self::NAME });
        }
        Ok(values)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
