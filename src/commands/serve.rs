use anyhow::Result;

use crate::api::{self, state::AppState};
use crate::market::refresh::MarketRefresher;

use super::{Session, runtime};

/// Take a first market snapshot, keep it fresh in the background and
/// serve the API until Ctrl-C.
pub fn run(session: Session, host: &str, port: u16) -> Result<()> {
    let gateways = session.gateways()?;
    let interval = session.config.refresh_interval();
    let Session {
        config, catalog, ..
    } = session;

    runtime()?.block_on(async move {
        let (refresher, snapshot) =
            MarketRefresher::start(gateways.market, gateways.balances, interval).await;
        tracing::info!(interval_secs = interval.as_secs(), "market refresh scheduled");
        let refresh_task = tokio::spawn(refresher.run());

        let state = AppState::new(catalog, config.assumptions, snapshot);
        let served = api::serve(host, port, state).await;

        refresh_task.abort();
        served
    })
}
