//! Aggregations behind the dashboard page.
//!
//! Every function is pure over a borrowed [`Dataset`](bizdash_core::Dataset).

pub mod aggregate;
pub mod dashboard;
pub mod resample;

pub use aggregate::{
    category_revenue, cumulative_revenue, filter_by_region, region_options, totals,
};
pub use dashboard::build_dashboard;
pub use resample::{daily_series, month_end, monthly_sales};
