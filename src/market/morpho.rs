use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::json;

use crate::model::VenueRates;

pub const LIVE_SOURCE: &str = "Morpho Blue API (live)";
pub const FALLBACK_SOURCE: &str = "Morpho Blue";

/// Borrow APYs outside this band (percentage points) are treated as noise.
const MIN_VALID_APY: f64 = 0.0;
const MAX_VALID_APY: f64 = 20.0;

const MARKETS_QUERY: &str = r#"{
  markets(where: { loanAssetSymbol_in: ["USDC"] }, first: 10, orderBy: SupplyAssetsUsd, orderDirection: Desc) {
    items {
      state { borrowApy }
    }
  }
}"#;

// ── API response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MarketsResponse {
    pub data: Option<MarketsData>,
}

#[derive(Debug, Deserialize)]
pub struct MarketsData {
    pub markets: Option<MarketPage>,
}

#[derive(Debug, Deserialize)]
pub struct MarketPage {
    #[serde(default)]
    pub items: Vec<MarketItem>,
}

#[derive(Debug, Deserialize)]
pub struct MarketItem {
    pub state: Option<MarketState>,
}

#[derive(Debug, Deserialize)]
pub struct MarketState {
    /// Fraction on the wire (0.05 = 5%).
    #[serde(rename = "borrowApy")]
    pub borrow_apy: Option<f64>,
}

// ── Public API ───────────────────────────────────────────────────────

/// Mean borrow APY, in percentage points, over the markets with a sane rate.
pub fn average_borrow_apy(resp: &MarketsResponse) -> Option<f64> {
    let rates: Vec<f64> = resp
        .data
        .as_ref()
        .and_then(|d| d.markets.as_ref())
        .map(|page| page.items.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|m| m.state.as_ref()?.borrow_apy)
        .map(|fraction| fraction * 100.0)
        .filter(|pct| *pct > MIN_VALID_APY && *pct < MAX_VALID_APY)
        .collect();

    if rates.is_empty() {
        None
    } else {
        Some(rates.iter().sum::<f64>() / rates.len() as f64)
    }
}

/// Query the Morpho GraphQL API for the average USDC borrow APY.
pub async fn fetch_borrow_apy(client: &reqwest::Client, url: &str) -> Result<f64> {
    let resp = client
        .post(url)
        .json(&json!({ "query": MARKETS_QUERY }))
        .send()
        .await
        .context("posting Morpho markets query")?
        .error_for_status()?
        .json::<MarketsResponse>()
        .await
        .context("decoding Morpho markets response")?;

    match average_borrow_apy(&resp) {
        Some(apy) => Ok(apy),
        None => bail!("Morpho returned no USDC markets with a borrow APY in (0, 20)%"),
    }
}

/// Live Morpho Blue rates, or the fallback borrow rate if the API fails.
pub async fn blue_rates(client: &reqwest::Client, url: &str, fallback_borrow_apy: f64) -> VenueRates {
    match fetch_borrow_apy(client, url).await {
        Ok(borrow_apy) => VenueRates {
            supply_apy: None,
            borrow_apy,
            source: LIVE_SOURCE.to_string(),
            live: true,
        },
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), fallback = fallback_borrow_apy, "Morpho rates unavailable, using fallback");
            VenueRates {
                supply_apy: None,
                borrow_apy: fallback_borrow_apy,
                source: FALLBACK_SOURCE.to_string(),
                live: false,
            }
        }
    }
}
