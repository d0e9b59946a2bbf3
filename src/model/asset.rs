use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What kind of return a tokenized asset produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Credit / CLO style funds paying a running yield.
    Yield,
    /// Short-dated government paper.
    Treasury,
    /// Price exposure only, no intrinsic yield.
    Equity,
}

impl AssetCategory {
    pub fn has_intrinsic_yield(self) -> bool {
        !matches!(self, AssetCategory::Equity)
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            AssetCategory::Yield => "yield",
            AssetCategory::Treasury => "treasury",
            AssetCategory::Equity => "equity",
        })
    }
}

/// Current yield characteristics of one tokenized real-world asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssetYield {
    pub symbol: String,
    pub name: String,
    /// Annualized yield in percentage points (5.48 = 5.48%). Zero for equity.
    pub base_apy: f64,
    /// Net asset value per token.
    pub nav: f64,
    /// Total value locked in the pool, USD.
    pub tvl: f64,
    /// Where the yield figure was read from.
    pub source: String,
    pub category: AssetCategory,
}
