//! Seeded sample data used when no file is uploaded.
//!
//! Generates one record per calendar day between two dates. Columns are drawn
//! one after another (all regions, then all categories, then sales, revenue and
//! profit) from a single ChaCha8 stream, so a given seed and date range always
//! produce the same dataset.

use anyhow::Result;
use bizdash_core::config::DataConfig;
use bizdash_core::records::{Dataset, Record, CATEGORIES, REGIONS};
use bizdash_core::traits::DataProvider;
use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

pub const SALES_RANGE: Range<u64> = 20..200;
pub const REVENUE_RANGE: Range<f64> = 1000.0..5000.0;
pub const PROFIT_RANGE: Range<f64> = 200.0..1000.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticDataProvider {
    start: NaiveDate,
    end: NaiveDate,
    seed: u64,
}

impl SyntheticDataProvider {
    pub const DEFAULT_SEED: u64 = 42;

    /// Creates a generator covering `start..=end` with the default seed.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Creates a generator from configuration, ending on `end` (normally today).
    #[must_use]
    pub fn from_config(config: &DataConfig, end: NaiveDate) -> Self {
        Self {
            start: config.start_date,
            end,
            seed: config.seed,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates the dataset. An `end` before `start` yields an empty dataset.
    #[must_use]
    pub fn generate(&self) -> Dataset {
        let dates: Vec<NaiveDate> = self
            .start
            .iter_days()
            .take_while(|d| *d <= self.end)
            .collect();
        let n = dates.len();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let regions: Vec<&str> = (0..n)
            .map(|_| REGIONS[rng.gen_range(0..REGIONS.len())])
            .collect();
        let categories: Vec<&str> = (0..n)
            .map(|_| CATEGORIES[rng.gen_range(0..CATEGORIES.len())])
            .collect();
        let sales: Vec<u64> = (0..n).map(|_| rng.gen_range(SALES_RANGE)).collect();
        let revenue: Vec<f64> = (0..n).map(|_| rng.gen_range(REVENUE_RANGE)).collect();
        let profit: Vec<f64> = (0..n).map(|_| rng.gen_range(PROFIT_RANGE)).collect();

        (0..n)
            .map(|i| {
                Record::new(
                    dates[i],
                    regions[i],
                    categories[i],
                    sales[i],
                    revenue[i],
                    profit[i],
                )
            })
            .collect()
    }
}

impl DataProvider for SyntheticDataProvider {
    fn load(&self) -> Result<Dataset> {
        let dataset = self.generate();
        tracing::info!(
            start = %self.start,
            end = %self.end,
            seed = self.seed,
            rows = dataset.len(),
            "generated sample dataset"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("synthetic:{}..={} seed={}", self.start, self.end, self.seed)
    }
}
