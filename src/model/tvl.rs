use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Native-asset balances held by strategy wallets, valued in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TotalTvl {
    pub total_usd: f64,
    /// Vault id → USD value of its wallet.
    pub by_strategy: BTreeMap<String, f64>,
    /// ETH/USD price used for the conversion.
    pub eth_price: f64,
    pub last_updated: DateTime<Utc>,
}

impl TotalTvl {
    pub fn empty(eth_price: f64) -> Self {
        TotalTvl {
            total_usd: 0.0,
            by_strategy: BTreeMap::new(),
            eth_price,
            last_updated: Utc::now(),
        }
    }
}
