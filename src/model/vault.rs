use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::chain::Chain;
use super::strategy::StrategyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        })
    }
}

/// Display metadata for one vault product plus its strategy parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Vault {
    /// URL-safe identifier, e.g. "jaaa-loop".
    pub id: String,
    pub name: String,
    pub description: String,
    /// Token users deposit.
    pub underlying: String,
    pub risk: RiskTier,
    pub chain: Chain,
    pub protocols: Vec<String>,
    pub strategy: StrategyConfig,
    /// APY shown before live market data has loaded.
    pub fallback_apy: f64,
}

impl Vault {
    /// Short leverage label, e.g. "3x" or "-1x".
    pub fn leverage_label(&self) -> String {
        format!("{}x", self.strategy.leverage)
    }
}
