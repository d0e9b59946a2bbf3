use anyhow::Result;
use chrono::Utc;

use crate::dashboard;
use crate::report;

use super::{Session, print_json, runtime};

pub fn run_market(session: &Session, json: bool) -> Result<()> {
    let gateways = session.gateways()?;
    let rates = runtime()?.block_on(gateways.market.fetch_rates());

    if json {
        print_json(&rates)
    } else {
        report::print_market(&rates);
        Ok(())
    }
}

pub fn run_tvl(session: &Session, json: bool) -> Result<()> {
    let gateways = session.gateways()?;
    let tvl = runtime()?.block_on(gateways.balances.fetch_tvl());

    if json {
        print_json(&tvl)
    } else {
        report::print_tvl(&tvl);
        Ok(())
    }
}

pub fn run_dashboard(session: &Session, json: bool) -> Result<()> {
    let gateways = session.gateways()?;
    let (rates, tvl) = runtime()?.block_on(async {
        tokio::join!(gateways.market.fetch_rates(), gateways.balances.fetch_tvl())
    });

    let assumptions = &session.config.assumptions;
    let view = dashboard::build_dashboard(
        &mut rand::rng(),
        &session.catalog,
        &rates,
        Some(&tvl),
        assumptions,
        assumptions.default_days,
        Utc::now().date_naive(),
    );

    if json {
        print_json(&view)
    } else {
        report::print_dashboard(&view);
        Ok(())
    }
}
