use anyhow::{Context, Result};
use bizdash_core::records::Dataset;
use bizdash_core::series::{CumulativePoint, ForecastResult, MonthlySales};
use csv::WriterBuilder;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DATASET_HEADER: [&str; 6] = ["Date", "Region", "Category", "Sales", "Revenue", "Profit"];
pub const PREDICTIONS_HEADER: [&str; 3] = ["Date", "Predicted Sales", "Predicted Revenue"];
pub const MONTHLY_SALES_HEADER: [&str; 2] = ["Date", "Sales"];
pub const CATEGORY_REVENUE_HEADER: [&str; 2] = ["Category", "Revenue"];
pub const CUMULATIVE_REVENUE_HEADER: [&str; 2] = ["Date", "Cumulative Revenue"];

pub struct CsvStorage;

#[derive(Serialize)]
struct CategoryRow<'a> {
    category: &'a str,
    revenue: f64,
}

impl CsvStorage {
    /// Writes a dataset in the same layout the loader accepts.
    ///
    /// Format: Date,Region,Category,Sales,Revenue,Profit
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
        Self::write_dataset_to(create(path)?, dataset)
    }

    /// # Errors
    /// Returns error if writing fails
    pub fn write_dataset_to<W: Write>(writer: W, dataset: &Dataset) -> Result<()> {
        write_rows(writer, &DATASET_HEADER, dataset.iter())
    }

    /// Writes forecast rows.
    ///
    /// Format: Date,Predicted Sales,Predicted Revenue
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_predictions(path: &Path, result: &ForecastResult) -> Result<()> {
        Self::write_predictions_to(create(path)?, result)
    }

    /// # Errors
    /// Returns error if writing fails
    pub fn write_predictions_to<W: Write>(writer: W, result: &ForecastResult) -> Result<()> {
        write_rows(writer, &PREDICTIONS_HEADER, result.rows.iter())
    }

    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_monthly_sales(path: &Path, months: &[MonthlySales]) -> Result<()> {
        write_rows(create(path)?, &MONTHLY_SALES_HEADER, months.iter())
    }

    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_category_revenue(path: &Path, revenue: &BTreeMap<String, f64>) -> Result<()> {
        let rows = revenue.iter().map(|(category, revenue)| CategoryRow {
            category,
            revenue: *revenue,
        });
        write_rows(create(path)?, &CATEGORY_REVENUE_HEADER, rows)
    }

    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_cumulative_revenue(path: &Path, points: &[CumulativePoint]) -> Result<()> {
        write_rows(create(path)?, &CUMULATIVE_REVENUE_HEADER, points.iter())
    }
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create CSV file: {}", path.display()))
}

/// Writes the header explicitly so empty tables still carry their columns.
fn write_rows<W, T, I>(writer: W, header: &[&str], rows: I) -> Result<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_loader::CsvDataProvider;
    use bizdash_core::records::Record;
    use bizdash_core::series::ForecastRow;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    #[test]
    fn dataset_written_can_be_loaded_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        let dataset = Dataset::new(vec![
            Record::new(date(1), "North", "A", 12, 1234.5, 300.25),
            Record::new(date(1), "South", "B", 7, 999.0, -4.5),
        ]);

        CsvStorage::write_dataset(&path, &dataset).unwrap();
        let loaded = CsvDataProvider::read_path(&path).unwrap();

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn predictions_use_download_headers() {
        let result = ForecastResult {
            strategy: "Linear Regression".to_string(),
            horizon_days: 2,
            rows: vec![
                ForecastRow {
                    date: date(1),
                    predicted_sales: 10.5,
                    predicted_revenue: 2000.0,
                },
                ForecastRow {
                    date: date(2),
                    predicted_sales: 11.0,
                    predicted_revenue: 2010.25,
                },
            ],
        };
        let mut out = Vec::new();

        CsvStorage::write_predictions_to(&mut out, &result).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Date,Predicted Sales,Predicted Revenue\n\
             2024-04-01,10.5,2000.0\n\
             2024-04-02,11.0,2010.25\n"
        );
    }

    #[test]
    fn empty_tables_keep_their_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monthly.csv");

        CsvStorage::write_monthly_sales(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Date,Sales\n");
    }

    #[test]
    fn category_revenue_rows_are_sorted_by_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("categories.csv");
        let mut revenue = BTreeMap::new();
        revenue.insert("B".to_string(), 20.0);
        revenue.insert("A".to_string(), 10.5);

        CsvStorage::write_category_revenue(&path, &revenue).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Category,Revenue\nA,10.5\nB,20.0\n"
        );
    }
}
