use crate::aggregate::{
    category_revenue, cumulative_revenue, filter_by_region, region_options, totals,
};
use crate::resample::monthly_sales;
use bizdash_core::records::Dataset;
use bizdash_core::series::DashboardView;

/// Builds the dashboard page for one region selection.
///
/// Returns `None` when `region` is neither `"All"` nor present in the dataset.
#[must_use]
pub fn build_dashboard(dataset: &Dataset, region: &str) -> Option<DashboardView> {
    let options = region_options(dataset);
    if !options.iter().any(|o| o == region) {
        return None;
    }

    let regional = filter_by_region(dataset, region);
    tracing::debug!(
        region,
        rows = regional.len(),
        total_rows = dataset.len(),
        "building dashboard view"
    );

    Some(DashboardView {
        region_options: options,
        selected_region: region.to_string(),
        totals: totals(dataset),
        monthly_sales: monthly_sales(&regional),
        category_revenue: category_revenue(&regional),
        cumulative_revenue: cumulative_revenue(&regional),
    })
}
