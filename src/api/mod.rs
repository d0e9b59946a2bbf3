pub mod error;
pub mod handlers;
pub mod state;
pub mod types;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// All routes, with permissive CORS so a browser front end can read them.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(|| async { "ok" }))
        // Pages
        .route("/api/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/api/vaults", get(handlers::vaults::list_vaults))
        .route("/api/vaults/{id}", get(handlers::vaults::get_vault))
        .route("/api/assets", get(handlers::vaults::list_assets))
        // Market data
        .route("/api/market", get(handlers::market::get_market))
        .route("/api/tvl", get(handlers::market::get_tvl))
        // Calculator
        .route("/api/calculate", post(handlers::calc::calculate))
        .route("/api/history", post(handlers::calc::history))
        .layer(cors)
        .with_state(state)
}

/// Serve until Ctrl-C.
pub async fn serve(host: &str, port: u16, state: AppState) -> Result<()> {
    let app = router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;

    tracing::info!(%addr, "torque API server listening");
    println!("Torque API server listening on {addr}");
    println!("  Health:    GET  http://{addr}/health");
    println!("  Dashboard: GET  http://{addr}/api/dashboard");
    println!("  Vaults:    GET  http://{addr}/api/vaults");
    println!("  Market:    GET  http://{addr}/api/market");
    println!("  Calculate: POST http://{addr}/api/calculate");
    println!("  History:   POST http://{addr}/api/history");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("running server")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
