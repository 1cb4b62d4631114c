use bizdash_core::records::{Dataset, ALL_REGIONS};
use bizdash_core::series::{CumulativePoint, Totals};
use std::collections::{BTreeMap, BTreeSet};

/// Sums the three numeric columns.
///
/// Sales saturate at `u64::MAX` instead of wrapping.
#[must_use]
pub fn totals(dataset: &Dataset) -> Totals {
    dataset.iter().fold(Totals::default(), |acc, r| Totals {
        sales: acc.sales.saturating_add(r.sales),
        revenue: acc.revenue + r.revenue,
        profit: acc.profit + r.profit,
    })
}

/// Keeps records whose region equals `region` exactly; `"All"` keeps everything.
#[must_use]
pub fn filter_by_region(dataset: &Dataset, region: &str) -> Dataset {
    if region == ALL_REGIONS {
        return dataset.clone();
    }
    dataset
        .iter()
        .filter(|r| r.region == region)
        .cloned()
        .collect()
}

/// `"All"` followed by every distinct region present, sorted.
#[must_use]
pub fn region_options(dataset: &Dataset) -> Vec<String> {
    let distinct: BTreeSet<&str> = dataset.iter().map(|r| r.region.as_str()).collect();
    std::iter::once(ALL_REGIONS)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn category_revenue(dataset: &Dataset) -> BTreeMap<String, f64> {
    let mut revenue = BTreeMap::new();
    for record in dataset {
        *revenue.entry(record.category.clone()).or_insert(0.0) += record.revenue;
    }
    revenue
}

/// Running revenue total over records in date order.
///
/// Records sharing a date keep their relative order and each yields its own point.
#[must_use]
pub fn cumulative_revenue(dataset: &Dataset) -> Vec<CumulativePoint> {
    let mut sorted: Vec<_> = dataset.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut running = 0.0;
    sorted
        .into_iter()
        .map(|r| {
            running += r.revenue;
            CumulativePoint {
                date: r.date,
                cumulative_revenue: running,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdash_core::records::Record;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            Record::new(date(3), "West", "B", 10, 100.0, 10.0),
            Record::new(date(1), "North", "A", 20, 250.5, -5.0),
            Record::new(date(3), "North", "B", 5, 50.0, 2.5),
            Record::new(date(2), "East", "C", 1, 0.0, 0.0),
        ])
    }

    #[test]
    fn totals_sum_every_column() {
        let t = totals(&sample());

        assert_eq!(t.sales, 36);
        assert!((t.revenue - 400.5).abs() < 1e-9);
        assert!((t.profit - 7.5).abs() < 1e-9);
    }

    #[test]
    fn totals_ignore_row_order() {
        let ds = sample();
        let mut reversed = ds.clone().into_records();
        reversed.reverse();

        let a = totals(&ds);
        let b = totals(&Dataset::new(reversed));
        assert_eq!(a.sales, b.sales);
        assert!((a.revenue - b.revenue).abs() < 1e-9);
        assert!((a.profit - b.profit).abs() < 1e-9);
    }

    #[test]
    fn sales_total_saturates_instead_of_overflowing() {
        let ds = Dataset::new(vec![
            Record::new(date(1), "North", "A", u64::MAX, 1.0, 0.0),
            Record::new(date(2), "North", "A", 1, 1.0, 0.0),
        ]);

        assert_eq!(totals(&ds).sales, u64::MAX);
    }

    #[test]
    fn totals_of_empty_dataset_are_zero() {
        assert_eq!(totals(&Dataset::default()), Totals::default());
    }

    #[test]
    fn all_region_is_identity() {
        let ds = sample();
        assert_eq!(filter_by_region(&ds, ALL_REGIONS), ds);
    }

    #[test]
    fn region_filter_is_exact_and_keeps_order() {
        let north = filter_by_region(&sample(), "North");

        assert_eq!(north.len(), 2);
        assert_eq!(north.records()[0].date, date(1));
        assert_eq!(north.records()[1].date, date(3));
        assert!(filter_by_region(&sample(), "north").is_empty());
    }

    #[test]
    fn region_options_are_sorted_after_all() {
        assert_eq!(region_options(&sample()), vec!["All", "East", "North", "West"]);
        assert_eq!(region_options(&Dataset::default()), vec!["All"]);
    }

    #[test]
    fn category_revenue_has_one_entry_per_category() {
        let revenue = category_revenue(&sample());

        assert_eq!(revenue.len(), 3);
        assert!((revenue["A"] - 250.5).abs() < 1e-9);
        assert!((revenue["B"] - 150.0).abs() < 1e-9);
        assert!(revenue["C"].abs() < 1e-9);
    }

    #[test]
    fn cumulative_revenue_is_stable_and_non_decreasing() {
        let points = cumulative_revenue(&sample());

        assert_eq!(points.len(), 4);
        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3), date(3)]);
        // West's 100.0 precedes North's 50.0 on the shared date.
        assert!((points[2].cumulative_revenue - 350.5).abs() < 1e-9);
        assert!((points[3].cumulative_revenue - 400.5).abs() < 1e-9);
        assert!(points
            .windows(2)
            .all(|w| w[1].cumulative_revenue >= w[0].cumulative_revenue));
    }
}
