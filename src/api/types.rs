use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{AssetYield, HistoricalDataPoint, StrategyKind, Vault};
use crate::sim::{MAX_HISTORY_DAYS, SeriesMetrics};

use super::error::ApiError;

// ── Request types ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateRequest {
    pub base_yield: f64,
    pub leverage: f64,
    pub borrow_rate: f64,
    pub kind: StrategyKind,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HistoryRequest {
    pub base_yield: f64,
    pub leverage: f64,
    pub borrow_rate: f64,
    pub kind: StrategyKind,
    #[serde(default = "default_days")]
    pub days: u32,
    /// Fixes the random path when set.
    pub seed: Option<u64>,
}

fn default_days() -> u32 {
    90
}

impl CalculateRequest {
    pub fn check(&self) -> Result<(), ApiError> {
        require_finite(&[
            ("base_yield", self.base_yield),
            ("leverage", self.leverage),
            ("borrow_rate", self.borrow_rate),
        ])
    }
}

impl HistoryRequest {
    pub fn check(&self) -> Result<(), ApiError> {
        require_finite(&[
            ("base_yield", self.base_yield),
            ("leverage", self.leverage),
            ("borrow_rate", self.borrow_rate),
        ])?;
        if self.days > MAX_HISTORY_DAYS {
            return Err(ApiError::BadRequest(format!(
                "days must be at most {MAX_HISTORY_DAYS}, got {}",
                self.days
            )));
        }
        Ok(())
    }
}

fn require_finite(fields: &[(&str, f64)]) -> Result<(), ApiError> {
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(ApiError::BadRequest(format!(
                "{name} must be a finite number"
            )));
        }
    }
    Ok(())
}

// ── Response types ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct HistoryResponse {
    pub points: Vec<HistoricalDataPoint>,
    pub metrics: SeriesMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct VaultsResponse {
    pub vaults: Vec<Vault>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssetsResponse {
    pub assets: Vec<AssetYield>,
}
