pub mod config;
pub mod config_loader;
pub mod error;
pub mod file_watcher;
pub mod records;
pub mod report_formatter;
pub mod series;
pub mod traits;

pub use config::{
    AppConfig, DataConfig, ForecastConfig, HoltWintersConfig, OutputConfig, OutputFormat,
    StrategyPreference,
};
pub use config_loader::ConfigLoader;
pub use error::{ForecastError, MIN_FORECAST_DAYS};
pub use file_watcher::FileWatcher;
pub use records::{
    horizon_days, Dataset, Record, ALL_REGIONS, CATEGORIES, DAYS_PER_MONTH, MAX_MONTHS_AHEAD,
    MIN_MONTHS_AHEAD, REGIONS,
};
pub use report_formatter::{format_count, format_currency, ReportFormatter};
pub use series::{
    CumulativePoint, DailyTotals, DashboardView, DatedValue, ForecastResult, ForecastRow,
    MonthlySales, Totals,
};
pub use traits::{DataProvider, Forecaster};
