//! Entry points for each CLI subcommand.

pub mod calculate;
pub mod catalog;
pub mod history;
pub mod market;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::market::Gateways;

/// Config, catalog and network mode resolved from the global flags.
pub struct Session {
    pub config: Config,
    pub catalog: Catalog,
    pub offline: bool,
}

impl Session {
    /// `--catalog` wins over the config's `catalog` entry; neither means built-in.
    pub fn load(config_path: Option<&Path>, catalog_path: Option<&Path>, offline: bool) -> Result<Self> {
        let config = Config::load(config_path).context("loading config")?;

        let catalog = match catalog_path
            .map(Path::to_path_buf)
            .or_else(|| config.catalog.clone())
        {
            Some(path) => {
                let catalog = Catalog::load(&path)?;
                tracing::info!(path = %path.display(), vaults = catalog.vaults().len(), "loaded catalog");
                catalog
            }
            None => Catalog::builtin().clone(),
        };

        Ok(Self {
            config,
            catalog,
            offline,
        })
    }

    pub fn gateways(&self) -> Result<Gateways> {
        Gateways::build(&self.config, &self.catalog, self.offline)
    }
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().context("creating tokio runtime")
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
