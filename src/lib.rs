// ABOUTME: Main library module that exports the public API
// Query and storage cost estimates for a cloud dataset that grows every month

pub mod app;
pub mod calc;
pub mod utils;

// Re-export commonly used types
pub use app::{OutputFormat, QueryDefaults, StorageDefaults};
pub use calc::{
    compute_query_cost, compute_storage_cost, CostEstimate, QueryCostBreakdown, QueryScenario,
    StorageCostBreakdown, StorageRegime, StorageScenario,
};
pub use utils::{CostError, Result};
