#![allow(clippy::format_push_string)]
#![allow(clippy::uninlined_format_args)]

use crate::series::{CumulativePoint, DashboardView, ForecastResult};
use chrono::Datelike;

const RULE_HEAVY: &str = "═══════════════════════════════════════════════════════════════\n";
const RULE_LIGHT: &str = "───────────────────────────────────────────────────────────────\n";

pub struct ReportFormatter;

impl ReportFormatter {
    #[must_use]
    pub fn dashboard(view: &DashboardView) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output.push_str("                    BUSINESS DASHBOARD                         \n");
        output.push_str(RULE_HEAVY);
        output.push('\n');

        output.push_str(&format!(
            "Total Sales:           {}\n",
            format_count(view.totals.sales)
        ));
        output.push_str(&format!(
            "Total Revenue:         {}\n",
            format_currency(view.totals.revenue)
        ));
        output.push_str(&format!(
            "Total Profit:          {}\n",
            format_currency(view.totals.profit)
        ));
        output.push('\n');
        output.push_str(&format!(
            "Region:                {}  (options: {})\n",
            view.selected_region,
            view.region_options.join(", ")
        ));
        output.push('\n');

        output.push_str("Monthly Sales Trend\n");
        output.push_str(RULE_LIGHT);
        if view.monthly_sales.is_empty() {
            output.push_str("No data\n");
        }
        for month in &view.monthly_sales {
            output.push_str(&format!(
                "{}            {:>12}\n",
                month.month_end.format("%Y-%m-%d"),
                format_count(month.sales)
            ));
        }
        output.push('\n');

        output.push_str("Revenue by Product Category\n");
        output.push_str(RULE_LIGHT);
        if view.category_revenue.is_empty() {
            output.push_str("No data\n");
        }
        for (category, revenue) in &view.category_revenue {
            output.push_str(&format!(
                "{:<22} {:>16}\n",
                category,
                format_currency(*revenue)
            ));
        }
        output.push('\n');

        output.push_str("Cumulative Revenue Over Time\n");
        output.push_str(RULE_LIGHT);
        let month_closes = month_closing_points(&view.cumulative_revenue);
        if month_closes.is_empty() {
            output.push_str("No data\n");
        }
        for point in month_closes {
            output.push_str(&format!(
                "{}            {:>16}\n",
                point.date.format("%Y-%m-%d"),
                format_currency(point.cumulative_revenue)
            ));
        }

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output
    }

    #[must_use]
    pub fn forecast(result: &ForecastResult) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output.push_str("                 SALES & REVENUE FORECAST                      \n");
        output.push_str(RULE_HEAVY);
        output.push('\n');

        output.push_str(&format!("Strategy:              {}\n", result.strategy));
        output.push_str(&format!(
            "Horizon:               {} days\n",
            result.horizon_days
        ));
        if let (Some(first), Some(last)) = (result.first_date(), result.last_date()) {
            output.push_str(&format!(
                "Period:                {} to {}\n",
                first.format("%Y-%m-%d"),
                last.format("%Y-%m-%d")
            ));
        }
        output.push('\n');

        output.push_str("Date          Predicted Sales   Predicted Revenue\n");
        output.push_str(RULE_LIGHT);
        for row in &result.rows {
            output.push_str(&format!(
                "{}    {:>15.2}   {:>17}\n",
                row.date.format("%Y-%m-%d"),
                row.predicted_sales,
                format_currency(row.predicted_revenue)
            ));
        }

        output.push('\n');
        output.push_str(RULE_HEAVY);
        output
    }
}

/// Last cumulative point of every calendar month.
fn month_closing_points(points: &[CumulativePoint]) -> Vec<CumulativePoint> {
    let mut closes: Vec<CumulativePoint> = Vec::new();
    for point in points {
        match closes.last_mut() {
            Some(last)
                if last.date.year() == point.date.year()
                    && last.date.month() == point.date.month() =>
            {
                *last = *point;
            }
            _ => closes.push(*point),
        }
    }
    closes
}

/// Formats an integer with comma thousands separators.
#[must_use]
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Formats an amount as dollars with two decimals and thousands separators.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{ForecastRow, MonthlySales, Totals};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_has_two_decimals_and_sign() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.567), "$1,234.57");
        assert_eq!(format_currency(-98765.4), "-$98,765.40");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn cumulative_series_is_sampled_at_month_close() {
        let points: Vec<_> = [
            (date(2024, 1, 5), 10.0),
            (date(2024, 1, 30), 25.0),
            (date(2024, 2, 2), 40.0),
        ]
        .into_iter()
        .map(|(date, cumulative_revenue)| CumulativePoint {
            date,
            cumulative_revenue,
        })
        .collect();

        let closes = month_closing_points(&points);

        assert_eq!(closes.len(), 2);
        assert_eq!(closes[0].date, date(2024, 1, 30));
        assert!((closes[1].cumulative_revenue - 40.0).abs() < 1e-9);
    }

    #[test]
    fn dashboard_report_shows_metrics_and_sections() {
        let mut categories = BTreeMap::new();
        categories.insert("A".to_string(), 1500.0);
        let view = DashboardView {
            region_options: vec!["All".into(), "North".into()],
            selected_region: "All".into(),
            totals: Totals {
                sales: 12_345,
                revenue: 1500.0,
                profit: -20.5,
            },
            monthly_sales: vec![MonthlySales {
                month_end: date(2024, 1, 31),
                sales: 12_345,
            }],
            category_revenue: categories,
            cumulative_revenue: vec![],
        };

        let report = ReportFormatter::dashboard(&view);

        assert!(report.contains("Total Sales:           12,345"));
        assert!(report.contains("Total Revenue:         $1,500.00"));
        assert!(report.contains("Total Profit:          -$20.50"));
        assert!(report.contains("2024-01-31"));
        assert!(report.contains("Cumulative Revenue Over Time\n"));
    }

    #[test]
    fn forecast_report_lists_every_row() {
        let result = ForecastResult {
            strategy: "Linear Regression".into(),
            horizon_days: 2,
            rows: vec![
                ForecastRow {
                    date: date(2024, 1, 1),
                    predicted_sales: 10.0,
                    predicted_revenue: 100.0,
                },
                ForecastRow {
                    date: date(2024, 1, 2),
                    predicted_sales: 11.0,
                    predicted_revenue: 110.0,
                },
            ],
        };

        let report = ReportFormatter::forecast(&result);

        assert!(report.contains("Strategy:              Linear Regression"));
        assert!(report.contains("Period:                2024-01-01 to 2024-01-02"));
        assert!(report.contains("$110.00"));
    }
}
