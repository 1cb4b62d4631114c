//! Predict CLI command.
//!
//! Forecasts daily sales and revenue and writes the rows to a CSV file.

use anyhow::{Context, Result};
use bizdash_core::records::{MAX_MONTHS_AHEAD, MIN_MONTHS_AHEAD};
use bizdash_core::{AppConfig, ForecastConfig, OutputFormat, ReportFormatter, StrategyPreference};
use bizdash_data::{CsvStorage, DataSource};
use bizdash_forecast::ForecastEngine;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the predict command.
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Uploaded CSV file. Sample data is generated when omitted.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Months ahead to predict, 1 to 24 (defaults to config)
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32)
            .range(i64::from(MIN_MONTHS_AHEAD)..=i64::from(MAX_MONTHS_AHEAD))
    )]
    pub months: Option<u32>,

    /// Forecasting strategy: auto, holt-winters, linear (defaults to config)
    #[arg(long)]
    pub strategy: Option<StrategyPreference>,

    /// Predictions CSV path (defaults to config, normally predictions.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: text or json (defaults to config)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Runs the predict command.
///
/// # Errors
/// Returns an error if the dataset cannot be loaded, forecasting fails, or the
/// predictions file cannot be written.
pub fn run_predict(args: PredictArgs, config: &AppConfig) -> Result<()> {
    let months = resolve_months(args.months, &config.forecast);
    let forecast_config = ForecastConfig {
        strategy: args.strategy.unwrap_or(config.forecast.strategy),
        ..config.forecast.clone()
    };

    let source = DataSource::resolve(args.data.clone(), &config.data, super::today());
    let dataset = source.load()?;

    let engine = ForecastEngine::new(&forecast_config);
    let result = engine
        .forecast(&dataset, months)
        .context("Failed to forecast sales and revenue")?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.output.predictions_file));
    CsvStorage::write_predictions(&output, &result)?;
    tracing::info!(path = %output.display(), rows = result.rows.len(), "wrote predictions");

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Text => println!("{}", ReportFormatter::forecast(&result)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&result).context("Failed to serialize forecast")?
        ),
    }
    Ok(())
}

/// Keeps a configured default inside the accepted range; CLI values are
/// already range-checked by clap.
fn resolve_months(requested: Option<u32>, config: &ForecastConfig) -> u32 {
    requested
        .unwrap_or(config.default_months)
        .clamp(MIN_MONTHS_AHEAD, MAX_MONTHS_AHEAD)
}
