// ABOUTME: Storage cost calculator with short-term and long-term pricing tiers
// Data older than the switch period is billed at the alternative (long-term) rate

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::accrual::accrue;
use super::CostEstimate;

/// Inputs for one storage cost estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageScenario {
    /// Number of months simulated
    pub timeframe: i64,
    /// GB ingested each month
    pub data_per_month: f64,
    /// Short-term storage cost in USD per GB
    pub cost: f64,
    /// Long-term storage cost in USD per GB
    pub alternative_cost: f64,
    /// Months a GB stays on the short-term price before switching
    pub cost_switch_period: i64,
}

/// Which pricing rule a scenario falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageRegime {
    /// The timeframe never outlasts the switch period
    ShortTermOnly,
    /// Some data ages into long-term pricing
    Tiered,
}

/// Storage cost split into its tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageCostBreakdown {
    pub scenario: StorageScenario,
    pub regime: StorageRegime,
    pub long_term_storage_months: i64,
    pub long_term_cost: f64,
    pub pre_switch_cost: f64,
    pub post_switch_cost: f64,
    pub short_term_cost: f64,
    pub total: f64,
}

impl StorageScenario {
    pub fn regime(&self) -> StorageRegime {
        if self.timeframe > self.cost_switch_period {
            StorageRegime::Tiered
        } else {
            StorageRegime::ShortTermOnly
        }
    }

    /// Months billed on the long-term tier; zero unless the scenario is tiered.
    /// Saturates at `i64::MAX` for extreme inputs.
    pub fn long_term_storage_months(&self) -> i64 {
        match self.regime() {
            StorageRegime::Tiered => self.timeframe.saturating_sub(self.cost_switch_period),
            StorageRegime::ShortTermOnly => 0,
        }
    }

    /// Month `n` is billed `cost * data_per_month * n`.
    ///
    /// This weighting differs from the accrual used by the tiered regime and
    /// the query calculator; it is kept as-is for compatibility with existing
    /// estimates.
    fn short_term_only_cost(&self) -> f64 {
        (1..=self.timeframe)
            .map(|n| self.cost * self.data_per_month * n as f64)
            .sum()
    }
}

impl CostEstimate for StorageScenario {
    type Breakdown = StorageCostBreakdown;

    fn total_cost(&self) -> f64 {
        self.breakdown().total
    }

    fn breakdown(&self) -> StorageCostBreakdown {
        let regime = self.regime();
        let long_term_storage_months = self.long_term_storage_months();

        let (long_term_cost, pre_switch_cost, post_switch_cost) = match regime {
            StorageRegime::ShortTermOnly => (0.0, self.short_term_only_cost(), 0.0),
            StorageRegime::Tiered => (
                accrue(
                    long_term_storage_months,
                    self.data_per_month,
                    self.alternative_cost,
                ),
                accrue(self.cost_switch_period, self.data_per_month, self.cost),
                long_term_storage_months as f64
                    * self.data_per_month
                    * self.cost_switch_period as f64
                    * self.cost,
            ),
        };

        let short_term_cost = pre_switch_cost + post_switch_cost;
        let total = long_term_cost + short_term_cost;

        debug!(
            ?regime,
            long_term_storage_months,
            long_term_cost,
            pre_switch_cost,
            post_switch_cost,
            total,
            "computed storage cost"
        );

        StorageCostBreakdown {
            scenario: *self,
            regime,
            long_term_storage_months,
            long_term_cost,
            pre_switch_cost,
            post_switch_cost,
            short_term_cost,
            total,
        }
    }
}

/// Total storage cost, `long_term_cost + short_term_cost`.
pub fn compute_storage_cost(
    timeframe: i64,
    data_per_month: f64,
    cost: f64,
    alternative_cost: f64,
    cost_switch_period: i64,
) -> f64 {
    StorageScenario {
        timeframe,
        data_per_month,
        cost,
        alternative_cost,
        cost_switch_period,
    }
    .total_cost()
}
