use clap::Parser;
use tracing_subscriber::EnvFilter;

use torque::cli::{self, Command};
use torque::commands::{self, Session};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let session = || Session::load(cli.config.as_deref(), cli.catalog.as_deref(), cli.offline);

    match cli.command {
        Command::Schema { target } => torque::schema::run(target),
        Command::Assets => commands::catalog::run_assets(&session()?),
        Command::Vaults => commands::catalog::run_vaults(&session()?),
        Command::Calculate { position, json } => {
            commands::calculate::run(&session()?, &position, json)
        }
        Command::History {
            position,
            days,
            seed,
            csv,
            json,
        } => commands::history::run(&session()?, &commands::history::HistoryConfig {
            position,
            days,
            seed,
            csv,
            json,
        }),
        Command::Market { json } => commands::market::run_market(&session()?, json),
        Command::Tvl { json } => commands::market::run_tvl(&session()?, json),
        Command::Dashboard { json } => commands::market::run_dashboard(&session()?, json),
        Command::Serve { host, port } => commands::serve::run(session()?, &host, port),
    }
}
