//! Generate CLI command.
//!
//! Writes the seeded sample dataset to a CSV file that `--data` accepts.

use anyhow::{bail, Result};
use bizdash_core::AppConfig;
use bizdash_data::{CsvStorage, SyntheticDataProvider};
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Output CSV file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// RNG seed (defaults to config, normally 42)
    #[arg(long)]
    pub seed: Option<u64>,

    /// First day, YYYY-MM-DD (defaults to config, normally 2023-01-01)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

/// Runs the generate command.
///
/// # Errors
/// Returns an error if the date range is reversed or the file cannot be written.
pub fn run_generate(args: GenerateArgs, config: &AppConfig) -> Result<()> {
    let start = args.start.unwrap_or(config.data.start_date);
    let end = args.end.unwrap_or_else(super::today);
    if end < start {
        bail!("End date {end} is before start date {start}");
    }

    let generator =
        SyntheticDataProvider::new(start, end).with_seed(args.seed.unwrap_or(config.data.seed));
    let dataset = generator.generate();
    CsvStorage::write_dataset(&args.output, &dataset)?;

    tracing::info!(
        path = %args.output.display(),
        rows = dataset.len(),
        seed = generator.seed(),
        "wrote sample dataset"
    );
    println!("Wrote {} rows to {}", dataset.len(), args.output.display());
    Ok(())
}
