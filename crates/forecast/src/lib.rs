//! Sales and revenue forecasting.
//!
//! Two interchangeable strategies implement [`bizdash_core::Forecaster`]:
//! additive Holt-Winters (behind the default `holt-winters` feature) and an
//! ordinary least-squares trend line. [`ForecastEngine`] picks one at
//! construction and always returns exactly `months_ahead * 30` consecutive days.

pub mod engine;
#[cfg(feature = "holt-winters")]
pub mod holt_winters;
pub mod linear;
pub mod selector;

pub use engine::ForecastEngine;
#[cfg(feature = "holt-winters")]
pub use holt_winters::HoltWinters;
pub use linear::{least_squares, LinearFit, LinearRegression};
pub use selector::StrategyKind;
