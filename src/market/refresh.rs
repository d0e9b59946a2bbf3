use std::sync::Arc;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::model::{MarketRates, TotalTvl};

use super::{BalanceGateway, MarketDataGateway};

/// Rates and TVL captured together. Published whole, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarketSnapshot {
    pub rates: MarketRates,
    pub tvl: TotalTvl,
}

/// Re-fetches market data on a fixed interval and publishes snapshots.
pub struct MarketRefresher {
    market: Arc<dyn MarketDataGateway>,
    balances: Arc<dyn BalanceGateway>,
    interval: Duration,
    tx: watch::Sender<Arc<MarketSnapshot>>,
}

impl MarketRefresher {
    /// Take the first snapshot and return the refresher with a subscriber.
    pub async fn start(
        market: Arc<dyn MarketDataGateway>,
        balances: Arc<dyn BalanceGateway>,
        interval: Duration,
    ) -> (Self, watch::Receiver<Arc<MarketSnapshot>>) {
        let first = fetch(market.as_ref(), balances.as_ref()).await;
        let (tx, rx) = watch::channel(Arc::new(first));
        (
            MarketRefresher {
                market,
                balances,
                interval,
                tx,
            },
            rx,
        )
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<MarketSnapshot>> {
        self.tx.subscribe()
    }

    /// Fetch once and publish. Timestamps never move backwards.
    pub async fn refresh_once(&self) -> Arc<MarketSnapshot> {
        let mut next = fetch(self.market.as_ref(), self.balances.as_ref()).await;

        let prev = self.tx.borrow().clone();
        if next.rates.timestamp < prev.rates.timestamp {
            next.rates.timestamp = prev.rates.timestamp;
        }
        if next.tvl.last_updated < prev.tvl.last_updated {
            next.tvl.last_updated = prev.tvl.last_updated;
        }

        let next = Arc::new(next);
        self.tx.send_replace(next.clone());
        next
    }

    /// Refresh forever. The first tick is one interval after the call.
    pub async fn run(self) {
        let start = tokio::time::Instant::now() + self.interval;
        let mut ticker = tokio::time::interval_at(start, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let snap = self.refresh_once().await;
            tracing::info!(
                aave_borrow = snap.rates.aave.borrow_apy,
                morpho_borrow = snap.rates.morpho.borrow_apy,
                tvl_usd = snap.tvl.total_usd,
                "market data refreshed"
            );
        }
    }
}

async fn fetch(market: &dyn MarketDataGateway, balances: &dyn BalanceGateway) -> MarketSnapshot {
    let (rates, tvl) = tokio::join!(market.fetch_rates(), balances.fetch_tvl());
    MarketSnapshot { rates, tvl }
}
