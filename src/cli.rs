use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::StrategyKind;
use crate::sim::MAX_HISTORY_DAYS;

/// Torque vaults: leveraged RWA yield calculator, simulated history,
/// live lending rates and the read-only vault API.
#[derive(Parser)]
#[command(name = "torque", version, about)]
pub struct Cli {
    /// Config file (default: $TORQUE_CONFIG, then <config dir>/torque/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Never touch the network; serve fallback rates and zero TVL
    #[arg(long, global = true)]
    pub offline: bool,

    /// Catalog JSON replacing the built-in asset and vault tables
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Output a JSON schema (catalog, config or dashboard)
    Schema {
        #[arg(value_enum, default_value = "catalog")]
        target: SchemaTarget,
    },

    /// List the RWA assets and their base yields
    Assets,

    /// List the vault products
    Vaults,

    /// Compute the net APY of one position
    Calculate {
        #[command(flatten)]
        position: PositionArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate a daily performance path for one position
    History {
        #[command(flatten)]
        position: PositionArgs,

        /// Number of daily points (at most 3650)
        #[arg(long, value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_HISTORY_DAYS)))]
        days: Option<u32>,

        /// Random seed; omit for a different path every run
        #[arg(long)]
        seed: Option<u64>,

        /// Also write the points to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the points as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch current borrow rates once
    Market {
        #[arg(long)]
        json: bool,
    },

    /// Read strategy wallet balances once and total them in USD
    Tvl {
        #[arg(long)]
        json: bool,
    },

    /// Fetch market data and print every vault with its net APY
    Dashboard {
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

/// Inputs shared by `calculate` and `history`.
#[derive(Args, Clone, Debug)]
pub struct PositionArgs {
    /// Asset base APY in percent, e.g. 5.48
    #[arg(long)]
    pub base_yield: f64,

    /// Signed leverage multiplier; -1 for a short
    #[arg(long, allow_negative_numbers = true)]
    pub leverage: f64,

    /// Borrow APY in percent, e.g. 2.99
    #[arg(long)]
    pub borrow_rate: f64,

    /// leverage_yield | treasury_plus | momentum | short
    #[arg(long, default_value = "leverage_yield")]
    pub kind: StrategyKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SchemaTarget {
    Catalog,
    Config,
    Dashboard,
}
