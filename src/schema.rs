use schemars::schema_for;

use crate::catalog::Catalog;
use crate::cli::SchemaTarget;
use crate::config::Config;
use crate::dashboard::Dashboard;

/// Generate and print the JSON Schema for a catalog, config or dashboard.
pub fn run(target: SchemaTarget) -> anyhow::Result<()> {
    let schema = match target {
        SchemaTarget::Catalog => schema_for!(Catalog),
        SchemaTarget::Config => schema_for!(Config),
        SchemaTarget::Dashboard => schema_for!(Dashboard),
    };
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
