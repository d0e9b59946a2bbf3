use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::{AssetCategory, StrategyKind};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate vault ID `{vault_id}`")]
    DuplicateVaultId { vault_id: String },

    #[error("Duplicate asset symbol `{symbol}`")]
    DuplicateAsset { symbol: String },

    #[error("Vault `{vault_id}` references unknown asset `{asset}`")]
    UnknownAsset { vault_id: String, asset: String },

    #[error("Asset `{symbol}` has non-finite {field}")]
    NonFinite { symbol: String, field: &'static str },

    #[error("Asset `{symbol}` ({category}) has negative base APY {base_apy}")]
    NegativeBaseApy {
        symbol: String,
        category: AssetCategory,
        base_apy: f64,
    },

    #[error("Equity asset `{symbol}` has base APY {base_apy}; equity carries no yield")]
    EquityWithYield { symbol: String, base_apy: f64 },

    #[error("Vault `{vault_id}` ({kind}) has leverage {leverage}; magnitude must be at least 1")]
    LeverageTooLow {
        vault_id: String,
        kind: StrategyKind,
        leverage: f64,
    },

    #[error("Short vault `{vault_id}` has leverage {leverage}; shorts must be exactly -1")]
    ShortLeverage { vault_id: String, leverage: f64 },
}

/// Read a catalog JSON file and validate it.
pub fn load_and_validate(path: &Path) -> Result<Catalog, Vec<CatalogError>> {
    let content = std::fs::read_to_string(path).map_err(|e| vec![CatalogError::Io(e)])?;
    let catalog: Catalog = serde_json::from_str(&content).map_err(|e| vec![CatalogError::Json(e)])?;
    validate(&catalog)?;
    Ok(catalog)
}

/// Check every catalog invariant, collecting all violations.
pub fn validate(catalog: &Catalog) -> Result<(), Vec<CatalogError>> {
    let mut errors = Vec::new();

    let mut symbols = HashSet::new();
    for asset in &catalog.assets {
        if !symbols.insert(asset.symbol.to_uppercase()) {
            errors.push(CatalogError::DuplicateAsset {
                symbol: asset.symbol.clone(),
            });
        }

        for (field, value) in [("base_apy", asset.base_apy), ("nav", asset.nav), ("tvl", asset.tvl)] {
            if !value.is_finite() {
                errors.push(CatalogError::NonFinite {
                    symbol: asset.symbol.clone(),
                    field,
                });
            }
        }

        match asset.category {
            AssetCategory::Equity if asset.base_apy != 0.0 => {
                errors.push(CatalogError::EquityWithYield {
                    symbol: asset.symbol.clone(),
                    base_apy: asset.base_apy,
                });
            }
            AssetCategory::Yield | AssetCategory::Treasury if asset.base_apy < 0.0 => {
                errors.push(CatalogError::NegativeBaseApy {
                    symbol: asset.symbol.clone(),
                    category: asset.category,
                    base_apy: asset.base_apy,
                });
            }
            _ => {}
        }
    }

    let mut ids = HashSet::new();
    for vault in &catalog.vaults {
        if !ids.insert(vault.id.as_str()) {
            errors.push(CatalogError::DuplicateVaultId {
                vault_id: vault.id.clone(),
            });
        }

        if catalog.asset(&vault.strategy.asset).is_none() {
            errors.push(CatalogError::UnknownAsset {
                vault_id: vault.id.clone(),
                asset: vault.strategy.asset.clone(),
            });
        }

        let leverage = vault.strategy.leverage;
        match vault.strategy.kind {
            StrategyKind::Short => {
                if leverage != -1.0 {
                    errors.push(CatalogError::ShortLeverage {
                        vault_id: vault.id.clone(),
                        leverage,
                    });
                }
            }
            kind => {
                // NaN fails this comparison too.
                if !(leverage.abs() >= 1.0) {
                    errors.push(CatalogError::LeverageTooLow {
                        vault_id: vault.id.clone(),
                        kind,
                        leverage,
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
