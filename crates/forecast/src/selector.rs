use crate::linear::LinearRegression;
use bizdash_core::config::{HoltWintersConfig, StrategyPreference};
use bizdash_core::traits::Forecaster;

#[cfg(feature = "holt-winters")]
use crate::holt_winters::HoltWinters;

/// Forecasting strategy chosen once when an engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    #[cfg(feature = "holt-winters")]
    HoltWinters,
    LinearRegression,
}

impl StrategyKind {
    /// Resolves a preference against the capabilities compiled into this build.
    ///
    /// Without the `holt-winters` feature every preference resolves to linear
    /// regression.
    #[must_use]
    pub fn detect(preference: StrategyPreference) -> Self {
        match preference {
            StrategyPreference::Linear => Self::LinearRegression,
            StrategyPreference::Auto | StrategyPreference::HoltWinters => {
                Self::time_series().unwrap_or_else(|| {
                    tracing::debug!(
                        %preference,
                        "time-series capability not available, using linear regression"
                    );
                    Self::LinearRegression
                })
            }
        }
    }

    /// Whether a time-series model is compiled in.
    #[must_use]
    pub const fn time_series_available() -> bool {
        Self::time_series().is_some()
    }

    #[cfg(feature = "holt-winters")]
    const fn time_series() -> Option<Self> {
        Some(Self::HoltWinters)
    }

    #[cfg(not(feature = "holt-winters"))]
    const fn time_series() -> Option<Self> {
        None
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "holt-winters")]
            Self::HoltWinters => HoltWinters::NAME,
            Self::LinearRegression => LinearRegression::NAME,
        }
    }

    /// Builds a fresh, unfitted model of this kind.
    #[must_use]
    pub fn build(self, holt_winters: &HoltWintersConfig) -> Box<dyn Forecaster> {
        match self {
            #[cfg(feature = "holt-winters")]
            Self::HoltWinters => Box::new(HoltWinters::new(holt_winters)),
            Self::LinearRegression => {
                let _ = holt_winters;
                Box::new(LinearRegression::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_preference_is_always_honoured() {
        assert_eq!(
            StrategyKind::detect(StrategyPreference::Linear),
            StrategyKind::LinearRegression
        );
    }

    #[cfg(feature = "holt-winters")]
    #[test]
    fn auto_prefers_time_series_when_compiled_in() {
        assert!(StrategyKind::time_series_available());
        assert_eq!(
            StrategyKind::detect(StrategyPreference::Auto),
            StrategyKind::HoltWinters
        );
        assert_eq!(
            StrategyKind::detect(StrategyPreference::HoltWinters),
            StrategyKind::HoltWinters
        );
    }

    #[cfg(not(feature = "holt-winters"))]
    #[test]
    fn missing_capability_falls_back_to_linear() {
        assert!(!StrategyKind::time_series_available());
        assert_eq!(
            StrategyKind::detect(StrategyPreference::HoltWinters),
            StrategyKind::LinearRegression
        );
    }

    #[test]
    fn built_models_report_their_kind() {
        let config = HoltWintersConfig::default();
        let kind = StrategyKind::detect(StrategyPreference::Auto);

        assert_eq!(kind.build(&config).name(), kind.name());
        assert_eq!(
            StrategyKind::LinearRegression.build(&config).name(),
            LinearRegression::NAME
        );
    }
}
