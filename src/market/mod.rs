//! Read-only network collaborators: lending rates, ETH price, wallet balances.
//!
//! Nothing here returns an error to the caller. Every source has a fixed
//! fallback that is substituted (and logged) when the network read fails.

pub mod aave;
pub mod balances;
pub mod morpho;
pub mod price;
pub mod refresh;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;

use crate::catalog::Catalog;
use crate::config::{Config, FallbackRates};
use crate::model::{Chain, MarketRates, TotalTvl, VenueRates};

use balances::WalletTarget;

/// Source of lending-market rates.
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    async fn fetch_rates(&self) -> MarketRates;
}

/// Source of strategy wallet balances.
#[async_trait]
pub trait BalanceGateway: Send + Sync {
    async fn fetch_tvl(&self) -> TotalTvl;
}

// ── Live gateways ────────────────────────────────────────────────────

pub struct LiveMarketData {
    client: reqwest::Client,
    morpho_url: String,
    fallback: FallbackRates,
}

impl LiveMarketData {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            morpho_url: config.morpho_api_url.clone(),
            fallback: config.fallback.clone(),
        }
    }
}

#[async_trait]
impl MarketDataGateway for LiveMarketData {
    async fn fetch_rates(&self) -> MarketRates {
        let aave = aave::horizon_rates(&self.fallback);
        let morpho =
            morpho::blue_rates(&self.client, &self.morpho_url, self.fallback.morpho_borrow_apy).await;
        tracing::debug!(aave_borrow = aave.borrow_apy, morpho_borrow = morpho.borrow_apy, morpho_live = morpho.live, "fetched market rates");

        MarketRates {
            aave,
            morpho,
            timestamp: Utc::now(),
        }
    }
}

pub struct RpcBalances {
    client: reqwest::Client,
    coingecko_url: String,
    fallback_eth_price: f64,
    targets: Vec<WalletTarget>,
    timeout: std::time::Duration,
}

impl RpcBalances {
    /// Resolve every configured wallet to the RPC of its vault's chain.
    /// Wallets for unknown vaults are read on Ethereum.
    pub fn new(client: reqwest::Client, config: &Config, catalog: &Catalog) -> Self {
        let targets = config
            .wallets
            .iter()
            .map(|(vault_id, address)| {
                let chain = catalog
                    .vault(vault_id)
                    .map(|v| v.chain.clone())
                    .unwrap_or_else(Chain::ethereum);
                WalletTarget {
                    vault_id: vault_id.clone(),
                    address: address.clone(),
                    rpc_url: config.rpc_url_for(&chain),
                }
            })
            .collect();

        Self {
            client,
            coingecko_url: config.coingecko_url.clone(),
            fallback_eth_price: config.fallback.eth_price_usd,
            targets,
            timeout: config.http_timeout(),
        }
    }

    pub fn wallet_count(&self) -> usize {
        self.targets.len()
    }
}

#[async_trait]
impl BalanceGateway for RpcBalances {
    async fn fetch_tvl(&self) -> TotalTvl {
        let eth_price =
            price::eth_price_or(&self.client, &self.coingecko_url, self.fallback_eth_price).await;
        balances::sum_balances(&self.targets, eth_price, self.timeout).await
    }
}

// ── Fallback-only gateways ───────────────────────────────────────────

/// Serves the configured fallback constants without touching the network.
pub struct StaticMarketData {
    pub fallback: FallbackRates,
}

#[async_trait]
impl MarketDataGateway for StaticMarketData {
    async fn fetch_rates(&self) -> MarketRates {
        MarketRates {
            aave: aave::horizon_rates(&self.fallback),
            morpho: VenueRates {
                supply_apy: None,
                borrow_apy: self.fallback.morpho_borrow_apy,
                source: morpho::FALLBACK_SOURCE.to_string(),
                live: false,
            },
            timestamp: Utc::now(),
        }
    }
}

/// Reports zero balances at the fallback ETH price.
pub struct StaticBalances {
    pub eth_price: f64,
}

#[async_trait]
impl BalanceGateway for StaticBalances {
    async fn fetch_tvl(&self) -> TotalTvl {
        TotalTvl::empty(self.eth_price)
    }
}

// ── Factory ──────────────────────────────────────────────────────────

pub struct Gateways {
    pub market: Arc<dyn MarketDataGateway>,
    pub balances: Arc<dyn BalanceGateway>,
}

impl Gateways {
    /// Live gateways, or fallback-only ones when `offline` is set.
    pub fn build(config: &Config, catalog: &Catalog, offline: bool) -> anyhow::Result<Self> {
        if offline {
            tracing::info!("offline mode: serving fallback market data");
            return Ok(Self::offline(config));
        }

        let client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .context("building HTTP client")?;

        let balances = RpcBalances::new(client.clone(), config, catalog);
        if balances.wallet_count() == 0 {
            tracing::info!("no strategy wallets configured; TVL will read as zero");
        }

        Ok(Self {
            market: Arc::new(LiveMarketData::new(client, config)),
            balances: Arc::new(balances),
        })
    }

    pub fn offline(config: &Config) -> Self {
        Self {
            market: Arc::new(StaticMarketData {
                fallback: config.fallback.clone(),
            }),
            balances: Arc::new(StaticBalances {
                eth_price: config.fallback.eth_price_usd,
            }),
        }
    }
}
