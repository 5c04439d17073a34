// ABOUTME: Default prices and periods for both calculators
// Values apply when an option is absent on the command line

use serde::{Deserialize, Serialize};

/// BigQuery on-demand analysis price, USD per GB scanned
pub const DEFAULT_QUERY_COST: f64 = 0.0048;
/// Active (short-term) storage price, USD per GB per month
pub const DEFAULT_STORAGE_COST: f64 = 0.02;
/// Long-term storage price, USD per GB per month
pub const DEFAULT_ALTERNATIVE_STORAGE_COST: f64 = 0.01;
/// Months before stored data switches to the long-term price
pub const DEFAULT_COST_SWITCH_PERIOD: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryDefaults {
    pub timeframe: i64,
    pub queries: i64,
    pub data_per_month: i64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageDefaults {
    pub timeframe: i64,
    pub data_per_month: i64,
    pub cost: f64,
    pub alternative_cost: f64,
    pub cost_switch_period: i64,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            timeframe: 0,
            queries: 0,
            data_per_month: 0,
            cost: DEFAULT_QUERY_COST,
        }
    }
}

impl Default for StorageDefaults {
    fn default() -> Self {
        Self {
            timeframe: 0,
            data_per_month: 0,
            cost: DEFAULT_STORAGE_COST,
            alternative_cost: DEFAULT_ALTERNATIVE_STORAGE_COST,
            cost_switch_period: DEFAULT_COST_SWITCH_PERIOD,
        }
    }
}
