// ABOUTME: Query cost calculator for full scans over an accumulating dataset
// Every query in a month scans all data ingested so far and is billed per GB

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::accrual::{accrue, accrue_monthly};
use super::CostEstimate;

/// Inputs for one query cost estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryScenario {
    /// Number of months simulated
    pub timeframe: i64,
    /// Full-dataset queries run per month
    pub queries: f64,
    /// GB ingested each month
    pub data_per_month: f64,
    /// Cost in USD per GB scanned
    pub cost: f64,
}

/// Query cost split by month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryCostBreakdown {
    pub scenario: QueryScenario,
    pub monthly_costs: Vec<f64>,
    pub total: f64,
}

impl CostEstimate for QueryScenario {
    type Breakdown = QueryCostBreakdown;

    fn total_cost(&self) -> f64 {
        compute_query_cost(self.timeframe, self.queries, self.data_per_month, self.cost)
    }

    fn breakdown(&self) -> QueryCostBreakdown {
        let monthly_costs = accrue_monthly(
            self.timeframe,
            self.data_per_month,
            self.cost * self.queries,
        );

        QueryCostBreakdown {
            scenario: *self,
            monthly_costs,
            total: self.total_cost(),
        }
    }
}

/// Total query cost over `timeframe` months.
///
/// Month `m` costs `cost * queries * (m * data_per_month)`. Inputs are not
/// validated: zero or negative values flow through the arithmetic.
pub fn compute_query_cost(timeframe: i64, queries: f64, data_per_month: f64, cost: f64) -> f64 {
    let total = accrue(timeframe, data_per_month, cost * queries);
    debug!(timeframe, queries, data_per_month, cost, total, "computed query cost");
    total
}
