use std::collections::HashMap;

use anyhow::{Context, Result};

/// CoinGecko `simple/price` body: `{"ethereum": {"usd": 2500.0}}`.
type SimplePrice = HashMap<String, HashMap<String, f64>>;

/// Spot ETH/USD from CoinGecko.
pub async fn fetch_eth_price(client: &reqwest::Client, url: &str) -> Result<f64> {
    let body = client
        .get(url)
        .query(&[("ids", "ethereum"), ("vs_currencies", "usd")])
        .send()
        .await
        .context("requesting ETH price")?
        .error_for_status()?
        .json::<SimplePrice>()
        .await
        .context("decoding ETH price")?;

    eth_usd(&body).context("CoinGecko response has no ethereum.usd price")
}

fn eth_usd(body: &SimplePrice) -> Option<f64> {
    body.get("ethereum")?
        .get("usd")
        .copied()
        .filter(|p| p.is_finite() && *p > 0.0)
}

/// ETH/USD, or `fallback` if the lookup fails.
pub async fn eth_price_or(client: &reqwest::Client, url: &str, fallback: f64) -> f64 {
    match fetch_eth_price(client, url).await {
        Ok(price) => price,
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), fallback, "ETH price unavailable, using fallback");
            fallback
        }
    }
}
