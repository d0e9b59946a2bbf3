use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::strategy::BorrowVenue;

/// Snapshot of one lending venue. Rates are percentage points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VenueRates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_apy: Option<f64>,
    pub borrow_apy: f64,
    pub source: String,
    /// False when the figure is a fallback constant.
    pub live: bool,
}

/// Lending-market snapshot consumed by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketRates {
    pub aave: VenueRates,
    pub morpho: VenueRates,
    pub timestamp: DateTime<Utc>,
}

impl MarketRates {
    pub fn venue(&self, venue: BorrowVenue) -> &VenueRates {
        match venue {
            BorrowVenue::AaveHorizon => &self.aave,
            BorrowVenue::MorphoBlue => &self.morpho,
        }
    }

    pub fn borrow_apy(&self, venue: BorrowVenue) -> f64 {
        self.venue(venue).borrow_apy
    }
}
