use crate::error::ForecastError;
use crate::records::Dataset;
use crate::series::DatedValue;
use anyhow::Result;

/// Produces the dataset one dashboard run works on.
pub trait DataProvider {
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or does not
    /// match the expected schema.
    fn load(&self) -> Result<Dataset>;

    /// Short human-readable description of the source, used in logs.
    fn describe(&self) -> String;
}

/// A univariate daily forecasting model.
///
/// Implementations are object safe so the engine can pick one once and build
/// fresh instances through a factory.
pub trait Forecaster: Send {
    /// Fits the model to a calendar-continuous daily series.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InsufficientData`] if the series is too short.
    fn fit(&mut self, series: &[DatedValue]) -> std::result::Result<(), ForecastError>;

    /// Predicts values up to `horizon_days` past the last observed date.
    ///
    /// The output may start with in-sample fitted values; callers keep the
    /// trailing `horizon_days` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::NotFitted`] if called before [`Forecaster::fit`].
    fn predict_future(
        &self,
        horizon_days: usize,
    ) -> std::result::Result<Vec<DatedValue>, ForecastError>;

    fn name(&self) -> &'static str;
}
