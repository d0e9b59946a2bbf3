use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::types::{AssetsResponse, VaultsResponse};
use crate::dashboard::{self, VaultView};

pub async fn list_vaults(State(state): State<AppState>) -> Json<VaultsResponse> {
    Json(VaultsResponse {
        vaults: state.inner.catalog.vaults().to_vec(),
    })
}

pub async fn get_vault(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VaultView>, ApiError> {
    let inner = &state.inner;
    let vault = inner
        .catalog
        .vault(&id)
        .ok_or_else(|| ApiError::NotFound(format!("vault '{id}' not found")))?;
    let asset = inner.catalog.asset(&vault.strategy.asset).ok_or_else(|| {
        ApiError::Internal(format!(
            "vault '{id}' references unknown asset '{}'",
            vault.strategy.asset
        ))
    })?;

    let snapshot = state.snapshot();
    let view = dashboard::build_view(
        &mut rand::rng(),
        vault,
        asset,
        &snapshot.rates,
        &inner.assumptions,
        inner.assumptions.default_days,
        Utc::now().date_naive(),
    );
    Ok(Json(view))
}

pub async fn list_assets(State(state): State<AppState>) -> Json<AssetsResponse> {
    Json(AssetsResponse {
        assets: state.inner.catalog.assets.clone(),
    })
}
