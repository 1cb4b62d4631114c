use crate::error::DataError;
use anyhow::Result;
use bizdash_core::records::{Dataset, Record};
use bizdash_core::traits::DataProvider;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Headers every uploaded table must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 6] =
    ["Date", "Region", "Category", "Sales", "Revenue", "Profit"];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Loads a dataset from an uploaded delimited file.
pub struct CsvDataProvider {
    path: PathBuf,
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    date: usize,
    region: usize,
    category: usize,
    sales: usize,
    revenue: usize,
    profit: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DataError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(DataError::MissingColumn { column })
        };

        Ok(Self {
            date: find(REQUIRED_COLUMNS[0])?,
            region: find(REQUIRED_COLUMNS[1])?,
            category: find(REQUIRED_COLUMNS[2])?,
            sales: find(REQUIRED_COLUMNS[3])?,
            revenue: find(REQUIRED_COLUMNS[4])?,
            profit: find(REQUIRED_COLUMNS[5])?,
        })
    }
}

impl CsvDataProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a dataset from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, a required column is
    /// missing, or any cell fails to parse.
    pub fn read_path(path: &Path) -> Result<Dataset, DataError> {
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read(file)
    }

    /// Reads a dataset from any CSV byte stream with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if a required column is missing, any cell fails to
    /// parse, or the Sales column sums past `u64::MAX`.
    pub fn read<R: Read>(reader: R) -> Result<Dataset, DataError> {
        let mut reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
        let columns = ColumnIndex::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        let mut sales_total = 0u64;
        for result in reader.records() {
            let row = result?;
            let record = parse_row(&row, &columns)?;
            sales_total = sales_total
                .checked_add(record.sales)
                .ok_or_else(|| DataError::Parse {
                    line: row.position().map_or(0, csv::Position::line),
                    message: "total of column 'Sales' exceeds the supported range".to_string(),
                })?;
            records.push(record);
        }

        Ok(Dataset::new(records))
    }
}

impl DataProvider for CsvDataProvider {
    fn load(&self) -> Result<Dataset> {
        let dataset = Self::read_path(&self.path)?;
        tracing::info!(
            path = %self.path.display(),
            rows = dataset.len(),
            "loaded uploaded dataset"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex) -> Result<Record, DataError> {
    let line = row.position().map_or(0, csv::Position::line);
    let cell = |index: usize, column: &'static str| {
        row.get(index).ok_or_else(|| DataError::Parse {
            line,
            message: format!("row has no value for column '{column}'"),
        })
    };

    let raw_date = cell(columns.date, "Date")?;
    let date = parse_date(raw_date).ok_or_else(|| DataError::Parse {
        line,
        message: format!("cannot parse '{raw_date}' as a date"),
    })?;

    Ok(Record {
        date,
        region: cell(columns.region, "Region")?.to_string(),
        category: cell(columns.category, "Category")?.to_string(),
        sales: parse_number(cell(columns.sales, "Sales")?, "Sales", line)?,
        revenue: parse_revenue(cell(columns.revenue, "Revenue")?, line)?,
        profit: parse_amount(cell(columns.profit, "Profit")?, "Profit", line)?,
    })
}

/// Finite amount; Profit may be negative.
fn parse_amount(raw: &str, column: &str, line: u64) -> Result<f64, DataError> {
    let value: f64 = parse_number(raw, column, line)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DataError::Parse {
            line,
            message: format!("'{raw}' in column '{column}' is not a finite number"),
        })
    }
}

fn parse_revenue(raw: &str, line: u64) -> Result<f64, DataError> {
    let value = parse_amount(raw, "Revenue", line)?;
    if value < 0.0 {
        return Err(DataError::Parse {
            line,
            message: format!("'{raw}' in column 'Revenue' is negative"),
        });
    }
    Ok(value)
}

fn parse_number<T: FromStr>(raw: &str, column: &str, line: u64) -> Result<T, DataError> {
    raw.parse().map_err(|_| DataError::Parse {
        line,
        message: format!("cannot parse '{raw}' in column '{column}'"),
    })
}

/// Parses a calendar date, discarding any time-of-day component.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
