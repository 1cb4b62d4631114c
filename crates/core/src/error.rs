use thiserror::Error;

/// Minimum number of distinct days a series needs before any model is fitted.
pub const MIN_FORECAST_DAYS: usize = 2;

/// Errors raised while fitting or evaluating a forecasting strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// Too few distinct days to fit a trend.
    #[error("forecasting needs at least {required} distinct days of data, got {days}")]
    InsufficientData { days: usize, required: usize },

    /// `predict_future` was called before `fit`.
    #[error("{model} has not been fitted")]
    NotFitted { model: &'static str },

    /// The model produced NaN or infinite values.
    #[error("{model} produced a non-finite prediction")]
    NonFinite { model: &'static str },

    /// Sales and revenue predictions did not line up into a gap-free horizon.
    #[error("forecast rows misaligned: expected {expected} consecutive days, got {actual}")]
    Misaligned { expected: usize, actual: usize },
}
