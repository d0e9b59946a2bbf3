use anyhow::Result;

use crate::report;

use super::Session;

pub fn run_assets(session: &Session) -> Result<()> {
    report::print_assets(&session.catalog.assets);
    Ok(())
}

pub fn run_vaults(session: &Session) -> Result<()> {
    report::print_vaults(&session.catalog);
    Ok(())
}
