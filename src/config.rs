use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Chain;
use crate::sim::Assumptions;

const CONFIG_ENV: &str = "TORQUE_CONFIG";
const ETH_RPC_ENV: &str = "TORQUE_ETH_RPC";
const BASE_RPC_ENV: &str = "TORQUE_BASE_RPC";

/// Constants substituted when a live source cannot be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FallbackRates {
    pub aave_supply_apy: f64,
    pub aave_borrow_apy: f64,
    pub morpho_borrow_apy: f64,
    pub eth_price_usd: f64,
}

impl Default for FallbackRates {
    fn default() -> Self {
        Self {
            aave_supply_apy: 2.50,
            aave_borrow_apy: 2.99,
            morpho_borrow_apy: 3.20,
            eth_price_usd: 2500.0,
        }
    }
}

/// Gateway and display configuration. Every field has a default, so an
/// empty `{}` file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Chain name → JSON-RPC URL used for balance reads.
    pub rpc_endpoints: BTreeMap<String, String>,
    pub morpho_api_url: String,
    pub coingecko_url: String,
    pub http_timeout_secs: u64,
    pub refresh_interval_secs: u64,
    pub fallback: FallbackRates,
    /// Vault id → strategy wallet address.
    pub wallets: BTreeMap<String, String>,
    pub assumptions: Assumptions,
    /// Optional catalog JSON replacing the built-in tables.
    pub catalog: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let rpc_endpoints = [Chain::ethereum(), Chain::base()]
            .into_iter()
            .filter_map(|c| Some((c.name.clone(), c.rpc_url?)))
            .collect();

        Self {
            rpc_endpoints,
            morpho_api_url: "https://api.morpho.org/graphql".to_string(),
            coingecko_url: "https://api.coingecko.com/api/v3/simple/price".to_string(),
            http_timeout_secs: 10,
            refresh_interval_secs: 300,
            fallback: FallbackRates::default(),
            wallets: BTreeMap::new(),
            assumptions: Assumptions::default(),
            catalog: None,
        }
    }
}

impl Config {
    /// Resolve and load the config.
    ///
    /// Lookup order: `explicit`, then `$TORQUE_CONFIG`, then
    /// `<config dir>/torque/config.json` if it exists, else defaults.
    /// `TORQUE_ETH_RPC` / `TORQUE_BASE_RPC` override the RPC endpoints.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| {
                dirs::config_dir()
                    .map(|d| d.join("torque").join("config.json"))
                    .filter(|p| p.exists())
            });

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn apply_env(&mut self) {
        for (var, chain) in [(ETH_RPC_ENV, "ethereum"), (BASE_RPC_ENV, "base")] {
            if let Ok(url) = std::env::var(var) {
                if !url.is_empty() {
                    self.rpc_endpoints.insert(chain.to_string(), url);
                }
            }
        }
    }

    /// RPC URL for a chain: configured endpoint first, then the chain's own.
    pub fn rpc_url_for(&self, chain: &Chain) -> Option<String> {
        self.rpc_endpoints
            .get(&chain.name.to_lowercase())
            .cloned()
            .or_else(|| chain.rpc_url().map(str::to_string))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        // A zero interval would spin the refresh loop.
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}
