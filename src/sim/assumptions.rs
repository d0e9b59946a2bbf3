use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Illustrative constants behind the calculator and the simulated paths.
///
/// None of these are derived from market data; they are display
/// assumptions and can be overridden from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Assumptions {
    /// Lending yield on idle capital added to treasury-plus vaults (pp).
    pub treasury_boost: f64,
    /// Long-run equity index return used for momentum vaults (pp/year).
    pub expected_equity_return: f64,
    /// Extra annual cost of keeping a short open on top of the borrow rate (pp).
    pub funding_spread: f64,
    /// Full width of the uniform daily noise on base yield (pp); 1.0 is +/-0.5 pp.
    pub yield_noise: f64,
    /// Full width of the uniform daily noise on the borrow rate (pp); 0.8 is +/-0.4 pp.
    pub borrow_noise: f64,
    /// Centre of the daily price draw; below 0.5 biases returns upward.
    pub price_bias: f64,
    /// Scale of the daily price return (0.02 gives about +/-1% a day).
    pub price_amplitude: f64,
    /// Notional every simulated path starts from.
    pub starting_value: f64,
    /// Length of the simulated history when the caller gives none.
    pub default_days: u32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            treasury_boost: 1.2,
            expected_equity_return: 10.0,
            funding_spread: 0.5,
            yield_noise: 1.0,
            borrow_noise: 0.8,
            price_bias: 0.48,
            price_amplitude: 0.02,
            starting_value: 1000.0,
            default_days: 90,
        }
    }
}
