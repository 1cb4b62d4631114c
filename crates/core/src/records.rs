use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Region label that selects every record.
pub const ALL_REGIONS: &str = "All";

/// Region labels drawn by the synthetic generator.
pub const REGIONS: [&str; 4] = ["North", "South", "East", "West"];

/// Product category labels drawn by the synthetic generator.
pub const CATEGORIES: [&str; 4] = ["A", "B", "C", "D"];

/// Forecast horizons treat every month as thirty days.
pub const DAYS_PER_MONTH: u32 = 30;

pub const MIN_MONTHS_AHEAD: u32 = 1;
pub const MAX_MONTHS_AHEAD: u32 = 24;

/// Converts a months-ahead request into a horizon in days.
#[must_use]
pub const fn horizon_days(months_ahead: u32) -> usize {
    (months_ahead * DAYS_PER_MONTH) as usize
}

/// One row of the business table.
///
/// Field names serialize to the column headers used by input and output files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sales")]
    pub sales: u64,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
}

impl Record {
    #[must_use]
    pub fn new(
        date: NaiveDate,
        region: impl Into<String>,
        category: impl Into<String>,
        sales: u64,
        revenue: f64,
        profit: f64,
    ) -> Self {
        Self {
            date,
            region: region.into(),
            category: category.into(),
            sales,
            revenue,
            profit,
        }
    }
}

/// Records in the order they were loaded or generated.
///
/// Dates are not unique; several records on the same day stay separate rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Earliest and latest dates present, or `None` for an empty dataset.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn horizon_uses_thirty_day_months() {
        assert_eq!(horizon_days(1), 30);
        assert_eq!(horizon_days(24), 720);
    }

    #[test]
    fn date_range_ignores_row_order() {
        let ds: Dataset = vec![
            Record::new(day(9), "North", "A", 1, 1.0, 1.0),
            Record::new(day(2), "South", "B", 1, 1.0, 1.0),
            Record::new(day(5), "East", "C", 1, 1.0, 1.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(ds.date_range(), Some((day(2), day(9))));
        assert_eq!(Dataset::default().date_range(), None);
    }

    #[test]
    fn record_serializes_with_column_headers() {
        let record = Record::new(day(1), "West", "D", 42, 1500.5, -12.25);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["Date"], "2024-03-01");
        assert_eq!(json["Region"], "West");
        assert_eq!(json["Sales"], 42);
        assert_eq!(json["Profit"], -12.25);
    }
}
