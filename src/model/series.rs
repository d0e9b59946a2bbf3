use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of one yield calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeveragedYieldResult {
    pub base_yield: f64,
    pub leverage: f64,
    pub borrow_rate: f64,
    /// Net annualized return, percentage points.
    pub net_leveraged_yield: f64,
    pub formula: String,
    pub breakdown: String,
    /// Annual cost of carrying a short, percentage points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holding_cost: Option<f64>,
    /// False for expected-only returns (momentum, short).
    pub guaranteed: bool,
}

/// One simulated daily sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistoricalDataPoint {
    pub date: NaiveDate,
    /// Cumulative value of the starting notional, rounded to cents.
    pub value: f64,
    /// Instantaneous net APY; 0 for price-driven strategies.
    pub apy: f64,
}
