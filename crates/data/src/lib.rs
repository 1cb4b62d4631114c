//! Data loading and storage for the business dashboard.
//!
//! This crate provides:
//! - CSV loading with exact-header schema checks
//! - Seeded synthetic sample data
//! - CSV writers for datasets, predictions, and chart series

pub mod csv_loader;
pub mod csv_storage;
pub mod error;
pub mod source;
pub mod synthetic;

pub use csv_loader::{parse_date, CsvDataProvider, REQUIRED_COLUMNS};
pub use csv_storage::CsvStorage;
pub use error::DataError;
pub use source::DataSource;
pub use synthetic::SyntheticDataProvider;
