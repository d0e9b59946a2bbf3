use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::types::{CalculateRequest, HistoryRequest, HistoryResponse};
use crate::model::LeveragedYieldResult;
use crate::sim::{SeriesMetrics, calculate_yield_with, generate_historical_series_with};

pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<LeveragedYieldResult>, ApiError> {
    let Json(req) = payload?;
    req.check()?;
    Ok(Json(calculate_yield_with(
        &state.inner.assumptions,
        req.base_yield,
        req.leverage,
        req.borrow_rate,
        req.kind,
    )))
}

pub async fn history(
    State(state): State<AppState>,
    payload: Result<Json<HistoryRequest>, JsonRejection>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let Json(req) = payload?;
    req.check()?;
    let assumptions = &state.inner.assumptions;
    let end = Utc::now().date_naive();

    let points = match req.seed {
        Some(seed) => generate_historical_series_with(
            &mut StdRng::seed_from_u64(seed),
            assumptions,
            req.base_yield,
            req.leverage,
            req.borrow_rate,
            req.days,
            req.kind,
            end,
        ),
        None => generate_historical_series_with(
            &mut rand::rng(),
            assumptions,
            req.base_yield,
            req.leverage,
            req.borrow_rate,
            req.days,
            req.kind,
            end,
        ),
    };
    let metrics = SeriesMetrics::from_series(assumptions.starting_value, &points);

    Ok(Json(HistoryResponse { points, metrics }))
}
