use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Network a vault's strategy wallet is deployed on.
///
/// Catalog JSON may give just `{"name": "base"}`; the RPC endpoint is then
/// taken from the config's `rpc_endpoints` entry for that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Chain {
    /// Lowercase network name, also the `rpc_endpoints` key.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Public endpoint used when the config has none for this chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
}

impl Chain {
    pub fn ethereum() -> Self {
        Self::custom("ethereum", 1, "https://eth.llamarpc.com")
    }

    pub fn base() -> Self {
        Self::custom("base", 8453, "https://mainnet.base.org")
    }

    pub fn custom(name: impl Into<String>, chain_id: u64, rpc_url: impl Into<String>) -> Self {
        Chain {
            name: name.into(),
            chain_id: Some(chain_id),
            rpc_url: Some(rpc_url.into()),
        }
    }

    /// Chain known only by name; needs a configured endpoint to be read.
    pub fn named(name: impl Into<String>) -> Self {
        Chain {
            name: name.into(),
            chain_id: None,
            rpc_url: None,
        }
    }

    pub fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    /// "Ethereum" for "ethereum".
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
