use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{
    AssetCategory, AssetYield, BorrowVenue, Chain, RiskTier, StrategyConfig, StrategyKind, Vault,
};
use crate::validate;

/// Static asset and vault tables. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    pub assets: Vec<AssetYield>,
    pub vaults: Vec<Vault>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(build_builtin);

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Load a catalog from a JSON file and check its invariants.
    pub fn load(path: &Path) -> Result<Catalog> {
        validate::load_and_validate(path).map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Catalog {} failed validation:\n  {}",
                path.display(),
                msgs.join("\n  ")
            )
        })
    }

    pub fn asset(&self, symbol: &str) -> Option<&AssetYield> {
        self.assets
            .iter()
            .find(|a| a.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn vault(&self, id: &str) -> Option<&Vault> {
        self.vaults.iter().find(|v| v.id == id)
    }

    pub fn vaults(&self) -> &[Vault] {
        &self.vaults
    }

    /// Distinct protocol names across all vaults, in first-seen order.
    pub fn protocols(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for p in self.vaults.iter().flat_map(|v| v.protocols.iter()) {
            if !seen.contains(&p.as_str()) {
                seen.push(p);
            }
        }
        seen
    }
}

// ── Built-in tables ──────────────────────────────────────────────────

fn asset(
    symbol: &str,
    name: &str,
    base_apy: f64,
    nav: f64,
    tvl: f64,
    source: &str,
    category: AssetCategory,
) -> AssetYield {
    AssetYield {
        symbol: symbol.into(),
        name: name.into(),
        base_apy,
        nav,
        tvl,
        source: source.into(),
        category,
    }
}

fn build_builtin() -> Catalog {
    // Yields as shown on app.centrifuge.io, updated by hand.
    let assets = vec![
        asset(
            "JAAA",
            "Janus Henderson Anemoy AAA CLO Fund",
            5.48,
            1.02,
            4_200_000.0,
            "app.centrifuge.io/pools/anemoy-liquid-yield",
            AssetCategory::Yield,
        ),
        asset(
            "JTRSY",
            "Janus Henderson Anemoy Treasury Fund",
            4.32,
            1.09,
            8_500_000.0,
            "app.centrifuge.io/pools/anemoy-treasury",
            AssetCategory::Treasury,
        ),
        asset(
            "ACRDX",
            "Apollo Diversified Credit Fund",
            7.65,
            1.04,
            2_800_000.0,
            "app.centrifuge.io/pools/apollo-credit",
            AssetCategory::Yield,
        ),
        asset(
            "SPXA",
            "S&P 500 Tokenized Fund",
            0.0,
            1.15,
            1_500_000.0,
            "app.centrifuge.io/pools/sp500-tracker",
            AssetCategory::Equity,
        ),
    ];

    let vaults = vec![
        Vault {
            id: "jaaa-loop".into(),
            name: "JAAA Leverage Loop".into(),
            description: "Deposits JAAA as collateral on Aave Horizon, borrows USDC and buys \
                          more JAAA until the position reaches 3x. Earns the AAA CLO yield on \
                          the full position net of borrow cost."
                .into(),
            underlying: "JAAA".into(),
            risk: RiskTier::Medium,
            chain: Chain::ethereum(),
            protocols: vec!["Centrifuge".into(), "Aave Horizon".into()],
            strategy: StrategyConfig {
                asset: "JAAA".into(),
                leverage: 3.0,
                borrow_venue: BorrowVenue::AaveHorizon,
                kind: StrategyKind::LeverageYield,
            },
            fallback_apy: 10.46,
        },
        Vault {
            id: "acrdx-loop".into(),
            name: "ACRDX Credit Loop".into(),
            description: "Loops Apollo private credit exposure to 2x against USDC borrowed on \
                          Morpho Blue."
                .into(),
            underlying: "ACRDX".into(),
            risk: RiskTier::Medium,
            chain: Chain::ethereum(),
            protocols: vec!["Centrifuge".into(), "Morpho Blue".into()],
            strategy: StrategyConfig {
                asset: "ACRDX".into(),
                leverage: 2.0,
                borrow_venue: BorrowVenue::MorphoBlue,
                kind: StrategyKind::LeverageYield,
            },
            fallback_apy: 12.10,
        },
        Vault {
            id: "jtrsy-stable".into(),
            name: "JTRSY Treasury Plus".into(),
            description: "Holds tokenized T-bills without leverage and lends idle USDC for an \
                          extra lending yield."
                .into(),
            underlying: "JTRSY".into(),
            risk: RiskTier::Low,
            chain: Chain::ethereum(),
            protocols: vec!["Centrifuge".into(), "Aave Horizon".into()],
            strategy: StrategyConfig {
                asset: "JTRSY".into(),
                leverage: 1.0,
                borrow_venue: BorrowVenue::AaveHorizon,
                kind: StrategyKind::TreasuryPlus,
            },
            fallback_apy: 5.52,
        },
        Vault {
            id: "spxa-momentum".into(),
            name: "SPXA Momentum".into(),
            description: "Levered 1.5x long on the tokenized S&P 500. Returns follow the index \
                          and are not guaranteed."
                .into(),
            underlying: "SPXA".into(),
            risk: RiskTier::High,
            chain: Chain::base(),
            protocols: vec!["Centrifuge".into(), "Morpho Blue".into()],
            strategy: StrategyConfig {
                asset: "SPXA".into(),
                leverage: 1.5,
                borrow_venue: BorrowVenue::MorphoBlue,
                kind: StrategyKind::Momentum,
            },
            fallback_apy: 13.40,
        },
        Vault {
            id: "spxa-short".into(),
            name: "SPXA Short".into(),
            description: "Borrows SPXA on Morpho Blue against USDC and sells it. Profits when \
                          the S&P 500 falls; pays borrow and funding while open."
                .into(),
            underlying: "USDC".into(),
            risk: RiskTier::High,
            chain: Chain::base(),
            protocols: vec!["Morpho Blue".into(), "Centrifuge".into()],
            strategy: StrategyConfig {
                asset: "SPXA".into(),
                leverage: -1.0,
                borrow_venue: BorrowVenue::MorphoBlue,
                kind: StrategyKind::Short,
            },
            fallback_apy: 0.0,
        },
    ];

    Catalog { assets, vaults }
}
