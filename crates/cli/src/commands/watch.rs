//! Watch CLI command.
//!
//! Re-renders the dashboard every time the uploaded file changes on disk.

use super::dashboard::{dashboard_view, render};
use anyhow::Result;
use bizdash_core::records::ALL_REGIONS;
use bizdash_core::{AppConfig, FileWatcher, OutputFormat};
use bizdash_data::CsvDataProvider;
use clap::Args;
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

/// Arguments for the watch command.
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// CSV file to watch
    #[arg(short, long)]
    pub data: PathBuf,

    /// Region to chart ("All" for every region)
    #[arg(short, long, default_value = ALL_REGIONS)]
    pub region: String,

    /// Output format: text or json (defaults to config)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Runs the watch command until the process is interrupted.
///
/// Load and render failures are reported and the command keeps waiting for
/// the next change.
///
/// # Errors
/// Returns an error if file watching cannot be started.
pub fn run_watch(args: WatchArgs, config: &AppConfig) -> Result<()> {
    let format = args.format.unwrap_or(config.output.format);

    refresh(&args.data, &args.region, format);
    FileWatcher::new(&args.data).watch(|path| {
        tracing::info!(path = %path.display(), "input changed, re-rendering");
        refresh(path, &args.region, format);
        ControlFlow::Continue(())
    })
}

fn refresh(path: &Path, region: &str, format: OutputFormat) {
    let report = CsvDataProvider::read_path(path)
        .map_err(anyhow::Error::from)
        .and_then(|dataset| dashboard_view(&dataset, region))
        .and_then(|view| render(&view, format));

    match report {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!("Failed to render dashboard: {e:#}"),
    }
}
