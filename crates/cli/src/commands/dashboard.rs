//! Dashboard CLI command.
//!
//! Prints the headline metrics and the three chart series for one region,
//! optionally exporting the series as CSV files.

use anyhow::{bail, Context, Result};
use bizdash_analytics::build_dashboard;
use bizdash_core::records::{Dataset, ALL_REGIONS};
use bizdash_core::series::DashboardView;
use bizdash_core::{AppConfig, OutputFormat, ReportFormatter};
use bizdash_data::{CsvStorage, DataSource};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the dashboard command.
#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    /// Uploaded CSV file. Sample data is generated when omitted.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Region to chart ("All" for every region)
    #[arg(short, long, default_value = ALL_REGIONS)]
    pub region: String,

    /// Output format: text or json (defaults to config)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Directory to write monthly, category and cumulative series as CSV
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

/// Runs the dashboard command.
///
/// # Errors
/// Returns an error if the dataset cannot be loaded, the region is unknown, or
/// exporting fails.
pub fn run_dashboard(args: DashboardArgs, config: &AppConfig) -> Result<()> {
    let source = DataSource::resolve(args.data.clone(), &config.data, super::today());
    let dataset = source.load()?;
    let view = dashboard_view(&dataset, &args.region)?;

    if let Some(dir) = &args.export_dir {
        export_series(dir, &view)?;
    }

    let format = args.format.unwrap_or(config.output.format);
    println!("{}", render(&view, format)?);
    Ok(())
}

/// Builds the view or explains which regions exist.
///
/// # Errors
/// Returns an error if `region` is not one of the dataset's options.
pub fn dashboard_view(dataset: &Dataset, region: &str) -> Result<DashboardView> {
    match build_dashboard(dataset, region) {
        Some(view) => Ok(view),
        None => {
            let options = bizdash_analytics::region_options(dataset);
            bail!(
                "Unknown region: '{region}'. Available: {}",
                options.join(", ")
            )
        }
    }
}

/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(view: &DashboardView, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(ReportFormatter::dashboard(view)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(view).context("Failed to serialize dashboard")
        }
    }
}

fn export_series(dir: &Path, view: &DashboardView) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    CsvStorage::write_monthly_sales(&dir.join("monthly_sales.csv"), &view.monthly_sales)?;
    CsvStorage::write_category_revenue(&dir.join("category_revenue.csv"), &view.category_revenue)?;
    CsvStorage::write_cumulative_revenue(
        &dir.join("cumulative_revenue.csv"),
        &view.cumulative_revenue,
    )?;

    tracing::info!(dir = %dir.display(), "exported chart series");
    Ok(())
}
