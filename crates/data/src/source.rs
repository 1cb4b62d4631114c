use crate::csv_loader::CsvDataProvider;
use crate::synthetic::SyntheticDataProvider;
use anyhow::Result;
use bizdash_core::config::DataConfig;
use bizdash_core::records::Dataset;
use bizdash_core::traits::DataProvider;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Where the dataset for one run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Upload(PathBuf),
    Synthetic(SyntheticDataProvider),
}

impl DataSource {
    /// Uses the uploaded file when given, otherwise seeded sample data ending on `today`.
    #[must_use]
    pub fn resolve(upload: Option<PathBuf>, config: &DataConfig, today: NaiveDate) -> Self {
        match upload {
            Some(path) => Self::Upload(path),
            None => Self::Synthetic(SyntheticDataProvider::from_config(config, today)),
        }
    }

    #[must_use]
    pub fn provider(&self) -> Box<dyn DataProvider> {
        match self {
            Self::Upload(path) => Box::new(CsvDataProvider::new(path.clone())),
            Self::Synthetic(generator) => Box::new(generator.clone()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the uploaded file cannot be read or fails schema checks.
    pub fn load(&self) -> Result<Dataset> {
        let provider = self.provider();
        tracing::debug!(source = %provider.describe(), "loading dataset");
        let dataset = provider.load()?;
        if dataset.is_empty() {
            tracing::warn!(source = %provider.describe(), "dataset has no rows");
        }
        Ok(dataset)
    }
}
