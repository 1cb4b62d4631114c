//! Calendar resampling of a dataset into monthly and daily buckets.
//!
//! Both resamplers cover every bucket between the first and last observed
//! bucket; empty buckets carry zeros. Sales sums saturate at `u64::MAX`.

use bizdash_core::records::Dataset;
use bizdash_core::series::{DailyTotals, MonthlySales};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Last calendar day of the month containing `date`.
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// Sales per calendar month keyed by month end, ascending.
#[must_use]
pub fn monthly_sales(dataset: &Dataset) -> Vec<MonthlySales> {
    let mut buckets: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in dataset {
        let sales = buckets.entry(month_end(record.date)).or_default();
        *sales = sales.saturating_add(record.sales);
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Vec::new();
    };

    let mut months = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        months.push(MonthlySales {
            month_end: cursor,
            sales: buckets.get(&cursor).copied().unwrap_or(0),
        });
        match cursor.succ_opt() {
            Some(next) => cursor = month_end(next),
            None => break,
        }
    }
    months
}

/// Sales and revenue per calendar day from the first to the last observed date.
#[must_use]
pub fn daily_series(dataset: &Dataset) -> Vec<DailyTotals> {
    let mut buckets: BTreeMap<NaiveDate, (u64, f64)> = BTreeMap::new();
    for record in dataset {
        let entry = buckets.entry(record.date).or_insert((0, 0.0));
        entry.0 = entry.0.saturating_add(record.sales);
        entry.1 += record.revenue;
    }

    let Some((first, last)) = dataset.date_range() else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| {
            let (sales, revenue) = buckets.get(&date).copied().unwrap_or((0, 0.0));
            DailyTotals {
                date,
                sales,
                revenue,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdash_core::records::Record;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, sales: u64, revenue: f64) -> Record {
        Record::new(date, "North", "A", sales, revenue, 0.0)
    }

    #[test]
    fn month_end_handles_lengths_and_year_end() {
        assert_eq!(month_end(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(month_end(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(month_end(date(2023, 12, 31)), date(2023, 12, 31));
        assert_eq!(month_end(date(2023, 4, 30)), date(2023, 4, 30));
    }

    #[test]
    fn two_days_in_one_month_form_one_bucket() {
        let ds = Dataset::new(vec![
            record(date(2024, 5, 6), 10, 1.0),
            record(date(2024, 5, 7), 20, 1.0),
        ]);

        let months = monthly_sales(&ds);

        assert_eq!(
            months,
            vec![MonthlySales {
                month_end: date(2024, 5, 31),
                sales: 30,
            }]
        );
    }

    #[test]
    fn empty_months_between_observations_are_zero() {
        let ds = Dataset::new(vec![
            record(date(2024, 3, 15), 7, 1.0),
            record(date(2023, 12, 1), 5, 1.0),
        ]);

        let months = monthly_sales(&ds);

        let keys: Vec<_> = months.iter().map(|m| m.month_end).collect();
        assert_eq!(
            keys,
            vec![date(2023, 12, 31), date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
        );
        let sales: Vec<_> = months.iter().map(|m| m.sales).collect();
        assert_eq!(sales, vec![5, 0, 0, 7]);
    }

    #[test]
    fn huge_sales_saturate_in_both_resamplers() {
        let ds = Dataset::new(vec![
            record(date(2024, 1, 1), u64::MAX, 1.0),
            record(date(2024, 1, 1), 1, 1.0),
        ]);

        assert_eq!(monthly_sales(&ds)[0].sales, u64::MAX);
        assert_eq!(daily_series(&ds)[0].sales, u64::MAX);
    }

    #[test]
    fn empty_dataset_has_no_buckets() {
        assert!(monthly_sales(&Dataset::default()).is_empty());
        assert!(daily_series(&Dataset::default()).is_empty());
    }

    #[test]
    fn daily_series_sums_same_day_rows_and_fills_gaps() {
        let ds = Dataset::new(vec![
            record(date(2024, 1, 4), 3, 30.0),
            record(date(2024, 1, 1), 1, 10.0),
            record(date(2024, 1, 1), 2, 20.0),
        ]);

        let series = daily_series(&ds);

        assert_eq!(series.len(), 4);
        assert_eq!(series[0].date, date(2024, 1, 1));
        assert_eq!(series[0].sales, 3);
        assert!((series[0].revenue - 30.0).abs() < 1e-9);
        assert_eq!(series[1].sales, 0);
        assert_eq!(series[2].sales, 0);
        assert_eq!(series[3].date, date(2024, 1, 4));
        assert!((series[3].revenue - 30.0).abs() < 1e-9);
    }
}
