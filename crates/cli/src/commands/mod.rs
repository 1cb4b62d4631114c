//! CLI commands for the business dashboard.

pub mod dashboard;
pub mod generate;
pub mod predict;
pub mod regions;
pub mod watch;

pub use dashboard::{run_dashboard, DashboardArgs};
pub use generate::{run_generate, GenerateArgs};
pub use predict::{run_predict, PredictArgs};
pub use regions::{run_regions, RegionsArgs};
pub use watch::{run_watch, WatchArgs};

/// Today's local date; synthetic data runs through it inclusive.
pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use bizdash_data::{CsvStorage, SyntheticDataProvider};
    use chrono::NaiveDate;
    use std::path::{Path, PathBuf};

    /// Writes a seeded first-quarter-2024 dataset to `dir/sales.csv`.
    pub(crate) fn sample_csv(dir: &Path) -> PathBuf {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let path = dir.join("sales.csv");
        CsvStorage::write_dataset(&path, &SyntheticDataProvider::new(start, end).generate())
            .unwrap();
        path
    }
}
