use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of vault product types. Each one prices its return differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Borrow against a yield-bearing asset to buy more of it.
    LeverageYield,
    /// Unlevered treasury exposure plus lending yield on idle capital.
    TreasuryPlus,
    /// Levered long exposure to an equity index.
    Momentum,
    /// Inverse exposure to an equity index.
    Short,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::LeverageYield,
        StrategyKind::TreasuryPlus,
        StrategyKind::Momentum,
        StrategyKind::Short,
    ];

    /// Yield strategies show an APY; the others show exposure.
    pub fn is_yield_strategy(self) -> bool {
        matches!(self, StrategyKind::LeverageYield | StrategyKind::TreasuryPlus)
    }

    /// Kinds whose simulated path follows an index price rather than rates.
    pub fn is_price_driven(self) -> bool {
        !self.is_yield_strategy()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::LeverageYield => "leverage_yield",
            StrategyKind::TreasuryPlus => "treasury_plus",
            StrategyKind::Momentum => "momentum",
            StrategyKind::Short => "short",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "leverage_yield" => Ok(StrategyKind::LeverageYield),
            "treasury_plus" => Ok(StrategyKind::TreasuryPlus),
            "momentum" => Ok(StrategyKind::Momentum),
            "short" => Ok(StrategyKind::Short),
            other => Err(format!(
                "unknown strategy kind '{other}' (expected leverage_yield | treasury_plus | momentum | short)"
            )),
        }
    }
}

/// Lending market a vault borrows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BorrowVenue {
    AaveHorizon,
    MorphoBlue,
}

impl BorrowVenue {
    pub fn display_name(self) -> &'static str {
        match self {
            BorrowVenue::AaveHorizon => "Aave Horizon",
            BorrowVenue::MorphoBlue => "Morpho Blue",
        }
    }
}

/// Static parameters of one vault product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrategyConfig {
    /// Underlying asset symbol, e.g. "JAAA".
    pub asset: String,
    /// Signed leverage multiplier; negative means short.
    pub leverage: f64,
    pub borrow_venue: BorrowVenue,
    pub kind: StrategyKind,
}
