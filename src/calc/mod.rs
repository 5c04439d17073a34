pub mod accrual;
pub mod query;
pub mod storage;

pub use query::{compute_query_cost, QueryCostBreakdown, QueryScenario};
pub use storage::{compute_storage_cost, StorageCostBreakdown, StorageRegime, StorageScenario};

use serde::Serialize;

/// A scenario that can be priced as a single total or a serializable breakdown
pub trait CostEstimate {
    type Breakdown: Serialize;

    fn total_cost(&self) -> f64;
    fn breakdown(&self) -> Self::Breakdown;
}
