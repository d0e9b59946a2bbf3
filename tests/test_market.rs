use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alloy::primitives::U256;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use torque::config::Config;
use torque::market::balances::{WalletTarget, sum_balances, wei_to_eth};
use torque::market::morpho::{self, MarketsResponse, average_borrow_apy};
use torque::market::refresh::MarketRefresher;
use torque::market::{
    BalanceGateway, Gateways, MarketDataGateway, StaticBalances, StaticMarketData, price,
};
use torque::model::{MarketRates, TotalTvl, VenueRates};

// ── Mock gateways ───────────────────────────────────────────────────

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

fn venue(borrow: f64) -> VenueRates {
    VenueRates {
        supply_apy: None,
        borrow_apy: borrow,
        source: "mock".into(),
        live: true,
    }
}

/// Each call reports a clock one hour earlier and a borrow rate one point higher.
struct RewindingMarket {
    calls: AtomicUsize,
}

#[async_trait]
impl MarketDataGateway for RewindingMarket {
    async fn fetch_rates(&self) -> MarketRates {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) as i64;
        MarketRates {
            aave: venue(2.99),
            morpho: venue(3.0 + n as f64),
            timestamp: t0() - chrono::Duration::hours(n),
        }
    }
}

struct RewindingBalances {
    calls: AtomicUsize,
}

#[async_trait]
impl BalanceGateway for RewindingBalances {
    async fn fetch_tvl(&self) -> TotalTvl {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) as i64;
        TotalTvl {
            total_usd: 1000.0 * (n + 1) as f64,
            by_strategy: Default::default(),
            eth_price: 2500.0,
            last_updated: t0() - chrono::Duration::minutes(n),
        }
    }
}

fn rewinding() -> (Arc<dyn MarketDataGateway>, Arc<dyn BalanceGateway>) {
    (
        Arc::new(RewindingMarket {
            calls: AtomicUsize::new(0),
        }),
        Arc::new(RewindingBalances {
            calls: AtomicUsize::new(0),
        }),
    )
}

// ── Morpho parsing ──────────────────────────────────────────────────

#[test]
fn test_morpho_average_filters_outliers() {
    let resp: MarketsResponse = serde_json::from_str(
        r#"{"data":{"markets":{"items":[
            {"state":{"borrowApy":0.05}},
            {"state":{"borrowApy":0.03}},
            {"state":{"borrowApy":0.5}},
            {"state":{"borrowApy":0}},
            {"state":{"borrowApy":null}},
            {"state":null}
        ]}}}"#,
    )
    .unwrap();

    let avg = average_borrow_apy(&resp).unwrap();
    assert!((avg - 4.0).abs() < 1e-9, "avg = {avg}");
}

#[test]
fn test_morpho_empty_response_has_no_rate() {
    let empty: MarketsResponse = serde_json::from_str(r#"{"data":{"markets":{"items":[]}}}"#).unwrap();
    assert_eq!(average_borrow_apy(&empty), None);

    let errored: MarketsResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
    assert_eq!(average_borrow_apy(&errored), None);
}

#[tokio::test]
async fn test_morpho_unreachable_falls_back() {
    let client = reqwest::Client::new();
    let rates = morpho::blue_rates(&client, "http://127.0.0.1:1/graphql", 3.20).await;

    assert_eq!(rates.borrow_apy, 3.20);
    assert_eq!(rates.source, "Morpho Blue");
    assert!(!rates.live);
    assert_eq!(rates.supply_apy, None);
}

#[tokio::test]
async fn test_eth_price_unreachable_falls_back() {
    let client = reqwest::Client::new();
    let eth = price::eth_price_or(&client, "http://127.0.0.1:1/simple/price", 2500.0).await;
    assert_eq!(eth, 2500.0);
}

#[tokio::test]
async fn test_live_gateway_with_dead_endpoints_uses_fallbacks() {
    let config = Config {
        morpho_api_url: "http://127.0.0.1:1/graphql".into(),
        coingecko_url: "http://127.0.0.1:1/simple/price".into(),
        http_timeout_secs: 2,
        ..Config::default()
    };
    let gateways = Gateways::build(&config, torque::catalog::Catalog::builtin(), false).unwrap();

    let rates = gateways.market.fetch_rates().await;
    assert_eq!(rates.morpho.borrow_apy, 3.20);
    assert!(!rates.morpho.live);
    assert_eq!(rates.aave.borrow_apy, 2.99);

    let tvl = gateways.balances.fetch_tvl().await;
    assert_eq!(tvl.eth_price, 2500.0);
    assert_eq!(tvl.total_usd, 0.0);
}

// ── Balances ────────────────────────────────────────────────────────

#[test]
fn test_wei_to_eth() {
    assert_eq!(wei_to_eth(U256::ZERO), 0.0);
    assert_eq!(wei_to_eth(U256::from(1_500_000_000_000_000_000u128)), 1.5);
    assert!(wei_to_eth(U256::MAX).is_finite());
}

#[tokio::test]
async fn test_unreadable_wallets_count_as_zero() {
    let targets = vec![
        WalletTarget {
            vault_id: "jaaa-loop".into(),
            address: "not-an-address".into(),
            rpc_url: Some("http://127.0.0.1:1".into()),
        },
        WalletTarget {
            vault_id: "spxa-short".into(),
            address: "0x000000000000000000000000000000000000dEaD".into(),
            rpc_url: None,
        },
    ];

    let tvl = sum_balances(&targets, 2500.0, Duration::from_secs(1)).await;
    assert_eq!(tvl.total_usd, 0.0);
    assert_eq!(tvl.by_strategy.len(), 2);
    assert_eq!(tvl.eth_price, 2500.0);
}

// ── Fallback gateways ───────────────────────────────────────────────

#[tokio::test]
async fn test_offline_gateways_serve_fallbacks() {
    let gateways = Gateways::offline(&Config::default());

    let rates = gateways.market.fetch_rates().await;
    assert_eq!(rates.aave.borrow_apy, 2.99);
    assert_eq!(rates.aave.supply_apy, Some(2.50));
    assert_eq!(rates.aave.source, "Aave Horizon V3");
    assert_eq!(rates.morpho.borrow_apy, 3.20);
    assert_eq!(rates.morpho.source, morpho::FALLBACK_SOURCE);
    assert!(!rates.morpho.live);

    let tvl = gateways.balances.fetch_tvl().await;
    assert_eq!(tvl.total_usd, 0.0);
    assert_eq!(tvl.eth_price, 2500.0);
}

#[tokio::test]
async fn test_static_gateways_use_custom_fallbacks() {
    let mut config = Config::default();
    config.fallback.morpho_borrow_apy = 4.4;

    let market = StaticMarketData {
        fallback: config.fallback.clone(),
    };
    assert_eq!(market.fetch_rates().await.morpho.borrow_apy, 4.4);

    let balances = StaticBalances { eth_price: 3000.0 };
    assert_eq!(balances.fetch_tvl().await.eth_price, 3000.0);
}

// ── Refresher ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_refresh_keeps_timestamps_monotonic() {
    let (market, balances) = rewinding();
    let (refresher, mut rx) = MarketRefresher::start(market, balances, Duration::from_secs(60)).await;

    let first = rx.borrow_and_update().clone();
    assert_eq!(first.rates.timestamp, t0());
    assert_eq!(first.rates.morpho.borrow_apy, 3.0);

    let second = refresher.refresh_once().await;
    assert!(rx.has_changed().unwrap());
    // New data is published...
    assert_eq!(second.rates.morpho.borrow_apy, 4.0);
    assert_eq!(second.tvl.total_usd, 2000.0);
    // ...but the clock never goes backwards.
    assert_eq!(second.rates.timestamp, t0());
    assert_eq!(second.tvl.last_updated, t0());
}

#[tokio::test]
async fn test_refresh_loop_publishes() {
    let (market, balances) = rewinding();
    let (refresher, mut rx) =
        MarketRefresher::start(market, balances, Duration::from_millis(20)).await;
    let task = tokio::spawn(refresher.run());

    tokio::time::timeout(Duration::from_secs(5), rx.changed())
        .await
        .expect("refresh within timeout")
        .unwrap();
    assert!(rx.borrow().rates.morpho.borrow_apy >= 4.0);

    task.abort();
}

// ── Live endpoints ──────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_live_morpho_borrow_apy() {
    let config = Config::default();
    let client = reqwest::Client::new();
    let apy = morpho::fetch_borrow_apy(&client, &config.morpho_api_url)
        .await
        .unwrap();
    assert!(apy > 0.0 && apy < 20.0, "apy = {apy}");
}

#[tokio::test]
#[ignore]
async fn test_live_eth_price() {
    let config = Config::default();
    let client = reqwest::Client::new();
    let eth = price::fetch_eth_price(&client, &config.coingecko_url)
        .await
        .unwrap();
    assert!(eth > 100.0, "eth = {eth}");
}
