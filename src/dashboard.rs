//! Per-vault display data assembled from the catalog and a rates snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::format::format_tvl_k;
use crate::model::{
    AssetYield, HistoricalDataPoint, MarketRates, RiskTier, StrategyKind, TotalTvl, Vault,
};
use crate::sim::{Assumptions, SeriesMetrics, calculate_yield_with, generate_historical_series_with};

const NO_BORROWING: &str = "N/A (no borrowing)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VaultSources {
    pub asset_source: String,
    pub borrow_source: String,
}

/// Everything the list and detail pages show for one vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VaultView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub underlying: String,
    pub risk: RiskTier,
    pub chain: String,
    pub protocols: Vec<String>,
    pub base_apy: f64,
    pub borrow_rate: f64,
    pub borrow_protocol: String,
    pub leverage: f64,
    pub net_apy: f64,
    pub formula: String,
    pub breakdown: String,
    pub historical: Vec<HistoricalDataPoint>,
    pub metrics: SeriesMetrics,
    pub sources: VaultSources,
    pub kind: StrategyKind,
    /// True when the vault shows an APY rather than price exposure.
    pub is_yield_strategy: bool,
}

/// Landing / vault-list page data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dashboard {
    pub vaults: Vec<VaultView>,
    /// Mean net APY over long vaults.
    pub avg_net_apy: f64,
    pub strategy_count: usize,
    pub protocol_count: usize,
    pub tvl_usd: f64,
    pub tvl_display: String,
    pub last_updated: DateTime<Utc>,
}

/// Price one vault against the current rates and simulate its history.
pub fn build_view<R: Rng + ?Sized>(
    rng: &mut R,
    vault: &Vault,
    asset: &AssetYield,
    rates: &MarketRates,
    assumptions: &Assumptions,
    days: u32,
    end: NaiveDate,
) -> VaultView {
    let strategy = &vault.strategy;
    let venue = rates.venue(strategy.borrow_venue);
    let borrow_rate = venue.borrow_apy;

    let result = calculate_yield_with(
        assumptions,
        asset.base_apy,
        strategy.leverage,
        borrow_rate,
        strategy.kind,
    );
    let historical = generate_historical_series_with(
        rng,
        assumptions,
        asset.base_apy,
        strategy.leverage,
        borrow_rate,
        days,
        strategy.kind,
        end,
    );
    let metrics = SeriesMetrics::from_series(assumptions.starting_value, &historical);

    let (borrow_protocol, borrow_source) = if strategy.kind == StrategyKind::TreasuryPlus {
        (NO_BORROWING.to_string(), "N/A".to_string())
    } else {
        (
            strategy.borrow_venue.display_name().to_string(),
            venue.source.clone(),
        )
    };

    VaultView {
        id: vault.id.clone(),
        name: vault.name.clone(),
        description: vault.description.clone(),
        underlying: vault.underlying.clone(),
        risk: vault.risk,
        chain: vault.chain.label(),
        protocols: vault.protocols.clone(),
        base_apy: asset.base_apy,
        borrow_rate,
        borrow_protocol,
        leverage: strategy.leverage,
        net_apy: result.net_leveraged_yield,
        formula: result.formula,
        breakdown: result.breakdown,
        historical,
        metrics,
        sources: VaultSources {
            asset_source: asset.source.clone(),
            borrow_source,
        },
        kind: strategy.kind,
        is_yield_strategy: strategy.kind.is_yield_strategy(),
    }
}

/// Build views for every vault plus the headline aggregates.
///
/// Vaults whose asset is missing from the catalog are skipped.
pub fn build_dashboard<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &Catalog,
    rates: &MarketRates,
    tvl: Option<&TotalTvl>,
    assumptions: &Assumptions,
    days: u32,
    end: NaiveDate,
) -> Dashboard {
    let vaults: Vec<VaultView> = catalog
        .vaults()
        .iter()
        .filter_map(|vault| {
            let Some(asset) = catalog.asset(&vault.strategy.asset) else {
                tracing::warn!(vault = %vault.id, asset = %vault.strategy.asset, "vault references unknown asset, skipping");
                return None;
            };
            Some(build_view(rng, vault, asset, rates, assumptions, days, end))
        })
        .collect();

    let tvl_usd = tvl.map(|t| t.total_usd).unwrap_or(0.0);

    Dashboard {
        avg_net_apy: average_long_apy(&vaults),
        strategy_count: catalog.vaults().len(),
        protocol_count: catalog.protocols().len(),
        tvl_usd,
        tvl_display: format_tvl_k(tvl_usd),
        last_updated: rates.timestamp,
        vaults,
    }
}

/// Mean `net_apy` of vaults with positive leverage; 0 when there are none.
pub fn average_long_apy(vaults: &[VaultView]) -> f64 {
    let long: Vec<f64> = vaults
        .iter()
        .filter(|v| v.leverage > 0.0)
        .map(|v| v.net_apy)
        .collect();
    if long.is_empty() {
        0.0
    } else {
        long.iter().sum::<f64>() / long.len() as f64
    }
}
