use anyhow::Context;
use bizdash_core::ConfigLoader;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{DashboardArgs, GenerateArgs, PredictArgs, RegionsArgs, WatchArgs};

#[derive(Parser)]
#[command(name = "bizdash")]
#[command(about = "Business dashboard with sales and revenue forecasting", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = ConfigLoader::DEFAULT_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total metrics, monthly sales, category revenue and cumulative revenue
    Dashboard(DashboardArgs),
    /// Forecast sales and revenue and write predictions.csv
    Predict(PredictArgs),
    /// List the region filter options
    Regions(RegionsArgs),
    /// Write the seeded sample dataset to a CSV file
    Generate(GenerateArgs),
    /// Re-render the dashboard whenever the data file changes
    Watch(WatchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::load_from(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config.display()))?;

    match cli.command {
        Commands::Dashboard(args) => commands::run_dashboard(args, &config)?,
        Commands::Predict(args) => commands::run_predict(args, &config)?,
        Commands::Regions(args) => commands::run_regions(args, &config)?,
        Commands::Generate(args) => commands::run_generate(args, &config)?,
        Commands::Watch(args) => commands::run_watch(args, &config)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(value: &str) -> Result<Option<u32>, clap::Error> {
        let cli = Cli::try_parse_from(["bizdash", "predict", "--months", value])?;
        match cli.command {
            Commands::Predict(args) => Ok(args.months),
            _ => unreachable!("parsed a different subcommand"),
        }
    }

    #[test]
    fn months_outside_one_to_twenty_four_are_rejected() {
        for value in ["0", "25", "-1", "three"] {
            assert!(months(value).is_err(), "accepted --months {value}");
        }
    }

    #[test]
    fn months_at_the_bounds_are_accepted() {
        assert_eq!(months("1").unwrap(), Some(1));
        assert_eq!(months("24").unwrap(), Some(24));
    }

    #[test]
    fn months_default_to_config_when_omitted() {
        let cli = Cli::try_parse_from(["bizdash", "predict"]).unwrap();

        assert!(matches!(cli.command, Commands::Predict(PredictArgs { months: None, .. })));
        assert_eq!(cli.config, PathBuf::from(ConfigLoader::DEFAULT_PATH));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["bizdash", "regions", "--config", "custom.toml"]).unwrap();

        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn strategy_and_format_parse_from_flags() {
        let cli = Cli::try_parse_from([
            "bizdash",
            "predict",
            "--strategy",
            "linear",
            "--format",
            "json",
        ])
        .unwrap();

        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.strategy, Some(bizdash_core::StrategyPreference::Linear));
        assert_eq!(args.format, Some(bizdash_core::OutputFormat::Json));
    }
}
