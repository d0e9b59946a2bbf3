use axum::Json;
use axum::extract::State;

use crate::api::state::AppState;
use crate::model::{MarketRates, TotalTvl};

pub async fn get_market(State(state): State<AppState>) -> Json<MarketRates> {
    Json(state.snapshot().rates.clone())
}

pub async fn get_tvl(State(state): State<AppState>) -> Json<TotalTvl> {
    Json(state.snapshot().tvl.clone())
}
