use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use tokio::sync::watch;
use tower::ServiceExt;

use torque::api::error::ApiError;
use torque::api::handlers::{calc, dashboard, market, vaults};
use torque::api::state::AppState;
use torque::api::types::{CalculateRequest, HistoryRequest};
use torque::api::router;
use torque::catalog::Catalog;
use torque::config::Config;
use torque::market::Gateways;
use torque::market::refresh::MarketSnapshot;
use torque::model::StrategyKind;
use torque::sim::Assumptions;

async fn offline_state() -> (AppState, watch::Sender<Arc<MarketSnapshot>>) {
    let gateways = Gateways::offline(&Config::default());
    let snapshot = MarketSnapshot {
        rates: gateways.market.fetch_rates().await,
        tvl: gateways.balances.fetch_tvl().await,
    };
    let (tx, rx) = watch::channel(Arc::new(snapshot));
    let state = AppState::new(Catalog::builtin().clone(), Assumptions::default(), rx);
    (state, tx)
}

fn history_request(json: &str) -> HistoryRequest {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn test_dashboard_endpoint() {
    let (state, _tx) = offline_state().await;
    let Json(d) = dashboard::get_dashboard(State(state)).await;

    assert_eq!(d.vaults.len(), 5);
    assert_eq!(d.protocol_count, 3);
    assert_eq!(d.tvl_display, "$0");
    assert!(d.vaults.iter().all(|v| v.historical.len() == 90));
}

#[tokio::test]
async fn test_vault_detail_and_not_found() {
    let (state, _tx) = offline_state().await;

    let Json(view) = vaults::get_vault(State(state.clone()), Path("acrdx-loop".to_string()))
        .await
        .unwrap();
    assert_eq!(view.borrow_rate, 3.20);
    assert!((view.net_apy - 12.10).abs() < 1e-9);

    let err = vaults::get_vault(State(state), Path("nope".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_catalog_listings() {
    let (state, _tx) = offline_state().await;

    let Json(list) = vaults::list_vaults(State(state.clone())).await;
    assert_eq!(list.vaults.len(), 5);

    let Json(assets) = vaults::list_assets(State(state)).await;
    assert_eq!(assets.assets.len(), 4);
}

#[tokio::test]
async fn test_market_endpoints_follow_snapshot() {
    let (state, tx) = offline_state().await;

    let Json(rates) = market::get_market(State(state.clone())).await;
    assert_eq!(rates.morpho.borrow_apy, 3.20);

    let mut next = MarketSnapshot::clone(&tx.borrow());
    next.rates.morpho.borrow_apy = 3.75;
    next.tvl.total_usd = 50_000.0;
    tx.send_replace(Arc::new(next));

    let Json(rates) = market::get_market(State(state.clone())).await;
    assert_eq!(rates.morpho.borrow_apy, 3.75);
    let Json(tvl) = market::get_tvl(State(state)).await;
    assert_eq!(tvl.total_usd, 50_000.0);
}

#[tokio::test]
async fn test_calculate_endpoint() {
    let (state, _tx) = offline_state().await;

    let Json(result) = calc::calculate(
        State(state.clone()),
        Ok(Json(CalculateRequest {
            base_yield: 5.48,
            leverage: 3.0,
            borrow_rate: 2.99,
            kind: StrategyKind::LeverageYield,
        })),
    )
    .await
    .unwrap();
    assert!((result.net_leveraged_yield - 10.46).abs() < 1e-9);

    let err = calc::calculate(
        State(state),
        Ok(Json(CalculateRequest {
            base_yield: f64::NAN,
            leverage: 3.0,
            borrow_rate: 2.99,
            kind: StrategyKind::LeverageYield,
        })),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_history_endpoint() {
    let (state, _tx) = offline_state().await;

    let req = history_request(
        r#"{"base_yield":0,"leverage":1.5,"borrow_rate":3.2,"kind":"momentum","seed":7}"#,
    );
    assert_eq!(req.days, 90);

    let Json(a) = calc::history(State(state.clone()), Ok(Json(req.clone())))
        .await
        .unwrap();
    let Json(b) = calc::history(State(state.clone()), Ok(Json(req)))
        .await
        .unwrap();
    assert_eq!(a.points.len(), 90);
    assert_eq!(a.points, b.points);
    assert_eq!(a.metrics.days, 90);

    let too_long = history_request(
        r#"{"base_yield":5,"leverage":2,"borrow_rate":3,"kind":"leverage_yield","days":4000}"#,
    );
    let err = calc::history(State(state), Ok(Json(too_long))).await.unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn test_unknown_kind_is_rejected_by_deserializer() {
    let res: Result<CalculateRequest, _> = serde_json::from_str(
        r#"{"base_yield":5,"leverage":2,"borrow_rate":3,"kind":"moon"}"#,
    );
    assert!(res.is_err());
}

// ── Routing ─────────────────────────────────────────────────────────

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_route() {
    let (state, _tx) = offline_state().await;
    let response = router(state)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_vault_route_found_and_missing() {
    let (state, _tx) = offline_state().await;
    let app = router(state);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/vaults/jaaa-loop")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], "jaaa-loop");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/vaults/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn test_calculate_route() {
    let (state, _tx) = offline_state().await;
    let response = router(state)
        .oneshot(post_json(
            "/api/calculate",
            r#"{"base_yield":5.48,"leverage":3,"borrow_rate":2.99,"kind":"leverage_yield"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!((body["net_leveraged_yield"].as_f64().unwrap() - 10.46).abs() < 1e-9);
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let (state, _tx) = offline_state().await;
    let app = router(state);

    for (uri, body) in [
        (
            "/api/calculate",
            r#"{"base_yield":5,"leverage":2,"borrow_rate":3,"kind":"moon"}"#,
        ),
        ("/api/calculate", r#"{"base_yield":"#),
        ("/api/history", r#"{"leverage":2}"#),
    ] {
        let response = app.clone().oneshot(post_json(uri, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
        let json = body_json(response).await;
        assert!(json["error"].is_string(), "{uri} {body}: {json}");
    }
}

#[test]
fn test_internal_error_from_anyhow() {
    let err: ApiError = anyhow::anyhow!("boom").into();
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
