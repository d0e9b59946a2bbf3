use crate::config::FallbackRates;
use crate::model::VenueRates;

pub const SOURCE: &str = "Aave Horizon V3";

/// Aave Horizon (institutional RWA market) rates.
///
/// Horizon has no public rates API; figures are read off the Horizon UI and
/// carried in the config fallbacks, so this never touches the network.
pub fn horizon_rates(fallback: &FallbackRates) -> VenueRates {
    VenueRates {
        supply_apy: Some(fallback.aave_supply_apy),
        borrow_apy: fallback.aave_borrow_apy,
        source: SOURCE.to_string(),
        live: false,
    }
}
