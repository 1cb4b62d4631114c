use bizdash_core::error::{ForecastError, MIN_FORECAST_DAYS};
use bizdash_core::series::DatedValue;
use bizdash_core::traits::Forecaster;
use chrono::NaiveDate;

/// Ordinary least squares fit of `value = intercept + slope * index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Number of observations; the first future index.
    pub n: usize,
    pub last_date: NaiveDate,
}

impl LinearFit {
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn value_at(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }
}

/// Trend-line fallback: regresses each value on its position in the series.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    fit: Option<LinearFit>,
}

impl LinearRegression {
    pub const NAME: &'static str = "Linear Regression";

    #[must_use]
    pub const fn new() -> Self {
        Self { fit: None }
    }
}

/// Returns `(slope, intercept)` of the least-squares line through
/// `(0, values[0]), (1, values[1]), ...`, or `None` for fewer than two points.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn least_squares(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    let (sxy, sxx) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sxy, sxx), (i, y)| {
            let dx = i as f64 - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });

    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

impl Forecaster for LinearRegression {
    fn fit(&mut self, series: &[DatedValue]) -> Result<(), ForecastError> {
        let values: Vec<f64> = series.iter().map(|p| p.value).collect();
        let (Some((slope, intercept)), Some(last)) = (least_squares(&values), series.last()) else {
            return Err(ForecastError::InsufficientData {
                days: series.len(),
                required: MIN_FORECAST_DAYS,
            });
        };
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(ForecastError::NonFinite { model: Self::NAME });
        }

        tracing::debug!(slope, intercept, n = series.len(), "fitted linear trend");
        self.fit = Some(LinearFit {
            slope,
            intercept,
            n: series.len(),
            last_date: last.date,
        });
        Ok(())
    }

    fn predict_future(&self, horizon_days: usize) -> Result<Vec<DatedValue>, ForecastError> {
        let fit = self.fit.ok_or(ForecastError::NotFitted { model: Self::NAME })?;

        Ok(fit
            .last_date
            .iter_days()
            .skip(1)
            .take(horizon_days)
            .enumerate()
            .map(|(step, date)| DatedValue::new(date, fit.value_at(fit.n + step)))
            .collect())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<DatedValue> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        start
            .iter_days()
            .zip(values)
            .map(|(date, v)| DatedValue::new(date, *v))
            .collect()
    }

    #[test]
    fn least_squares_recovers_exact_line() {
        let (slope, intercept) = least_squares(&[3.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 3.0).abs() < 1e-12);
    }

    #[test]
    fn least_squares_needs_two_points() {
        assert!(least_squares(&[]).is_none());
        assert!(least_squares(&[1.0]).is_none());
    }

    #[test]
    fn flat_series_has_zero_slope() {
        let (slope, intercept) = least_squares(&[4.0, 4.0, 4.0]).unwrap();
        assert!(slope.abs() < 1e-12);
        assert!((intercept - 4.0).abs() < 1e-12);
    }

    #[test]
    fn predictions_continue_the_line_after_last_day() {
        let mut model = LinearRegression::new();
        model.fit(&series(&[10.0, 12.0, 14.0])).unwrap();

        let preds = model.predict_future(3).unwrap();

        assert_eq!(preds.len(), 3);
        assert_eq!(preds[0].date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
        assert_eq!(preds[2].date, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
        let values: Vec<_> = preds.iter().map(|p| p.value).collect();
        for (got, want) in values.iter().zip([16.0, 18.0, 20.0]) {
            assert!((got - want).abs() < 1e-9);
        }
    }

    #[test]
    fn single_day_is_insufficient() {
        let mut model = LinearRegression::new();
        let err = model.fit(&series(&[5.0])).unwrap_err();

        assert_eq!(
            err,
            ForecastError::InsufficientData {
                days: 1,
                required: 2,
            }
        );
    }

    #[test]
    fn predicting_before_fit_fails() {
        assert_eq!(
            LinearRegression::new().predict_future(1).unwrap_err(),
            ForecastError::NotFitted {
                model: LinearRegression::NAME,
            }
        );
    }
}
