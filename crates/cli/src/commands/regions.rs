use anyhow::Result;
use bizdash_analytics::region_options;
use bizdash_core::AppConfig;
use bizdash_data::DataSource;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the regions command.
#[derive(Args, Debug, Clone)]
pub struct RegionsArgs {
    /// Uploaded CSV file. Sample data is generated when omitted.
    #[arg(short, long)]
    pub data: Option<PathBuf>,
}

/// Prints the region filter options, one per line.
///
/// # Errors
/// Returns an error if the dataset cannot be loaded.
pub fn run_regions(args: RegionsArgs, config: &AppConfig) -> Result<()> {
    let dataset = DataSource::resolve(args.data, &config.data, super::today()).load()?;
    for region in region_options(&dataset) {
        println!("{region}");
    }
    Ok(())
}
