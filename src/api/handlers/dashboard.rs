use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::api::state::AppState;
use crate::dashboard::{self, Dashboard};

pub async fn get_dashboard(State(state): State<AppState>) -> Json<Dashboard> {
    let snapshot = state.snapshot();
    let inner = &state.inner;

    let dashboard = dashboard::build_dashboard(
        &mut rand::rng(),
        &inner.catalog,
        &snapshot.rates,
        Some(&snapshot.tvl),
        &inner.assumptions,
        inner.assumptions.default_days,
        Utc::now().date_naive(),
    );
    Json(dashboard)
}
