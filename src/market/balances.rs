use std::collections::BTreeMap;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use chrono::Utc;

use crate::model::TotalTvl;

const WEI_PER_ETH: f64 = 1e18;

/// One strategy wallet to value.
#[derive(Debug, Clone)]
pub struct WalletTarget {
    pub vault_id: String,
    pub address: String,
    pub rpc_url: Option<String>,
}

/// Convert a wei balance to ETH. Saturates above `u128::MAX` wei.
pub fn wei_to_eth(wei: U256) -> f64 {
    let capped = if wei > U256::from(u128::MAX) {
        u128::MAX
    } else {
        wei.to::<u128>()
    };
    capped as f64 / WEI_PER_ETH
}

/// Native balance of `address` in ETH via `eth_getBalance`.
pub async fn fetch_native_balance(rpc_url: &str, address: &str, timeout: Duration) -> Result<f64> {
    let address: Address = address
        .parse()
        .with_context(|| format!("invalid wallet address {address}"))?;
    let provider = ProviderBuilder::new().connect_http(
        rpc_url
            .parse()
            .with_context(|| format!("invalid RPC url {rpc_url}"))?,
    );

    let wei = tokio::time::timeout(timeout, provider.get_balance(address))
        .await
        .with_context(|| format!("eth_getBalance timed out after {}s", timeout.as_secs()))?
        .context("eth_getBalance failed")?;

    Ok(wei_to_eth(wei))
}

/// Sum every wallet's balance in USD. A wallet that cannot be read counts as zero.
pub async fn sum_balances(targets: &[WalletTarget], eth_price: f64, timeout: Duration) -> TotalTvl {
    let mut by_strategy = BTreeMap::new();
    let mut total_usd = 0.0;

    for target in targets {
        let balance_eth = match &target.rpc_url {
            Some(rpc) => match fetch_native_balance(rpc, &target.address, timeout).await {
                Ok(eth) => eth,
                Err(e) => {
                    tracing::warn!(vault = %target.vault_id, address = %target.address, error = %format!("{e:#}"), "balance unavailable, counting as zero");
                    0.0
                }
            },
            None => {
                tracing::warn!(vault = %target.vault_id, "no RPC endpoint for wallet chain, counting as zero");
                0.0
            }
        };

        let balance_usd = balance_eth * eth_price;
        by_strategy.insert(target.vault_id.clone(), balance_usd);
        total_usd += balance_usd;
    }

    TotalTvl {
        total_usd,
        by_strategy,
        eth_price,
        last_updated: Utc::now(),
    }
}
