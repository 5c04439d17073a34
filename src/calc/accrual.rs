// ABOUTME: Month-by-month accrual of a growing dataset priced per GB
// Shared by the query calculator and both storage tiers

use tracing::trace;

/// Sums `price_per_gb * accumulated_gb` over `months` months.
///
/// The dataset starts at one month's worth of data in month 1 and grows by
/// `data_per_month` after each month has been priced, so month `m` is billed
/// for `m * data_per_month` GB. A non-positive `months` accrues nothing.
pub fn accrue(months: i64, data_per_month: f64, price_per_gb: f64) -> f64 {
    let mut accumulated_data = data_per_month;
    let mut total = 0.0;

    for month in 1..=months {
        let monthly_cost = price_per_gb * accumulated_data;
        trace!(month, accumulated_data, monthly_cost, "accrued month");

        total += monthly_cost;
        accumulated_data += data_per_month;
    }

    total
}

/// Per-month costs for the same accrual, in month order.
pub fn accrue_monthly(months: i64, data_per_month: f64, price_per_gb: f64) -> Vec<f64> {
    let mut accumulated_data = data_per_month;
    let mut costs = Vec::new();

    for _ in 1..=months {
        costs.push(price_per_gb * accumulated_data);
        accumulated_data += data_per_month;
    }

    costs
}
