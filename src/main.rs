//! Entry point: parse CLI and dispatch to command handlers.

use baseball_stats::{
    cli::{BaseballStats, Commands},
    commands::{
        admin::handle_admin,
        browse::{handle_leaders, handle_player, handle_players, handle_teams},
        common::open_store,
        sync::handle_sync,
    },
    roster::Roster,
    seed::MockSeed,
    Result,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "baseball_stats=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = BaseballStats::parse();
    init_tracing(app.verbose);

    let mut store = open_store(app.db)?;

    match app.command {
        Commands::Players { query, team, json } => {
            handle_players(&mut Roster::new(&mut store, MockSeed), query, team, json)?
        }
        Commands::Player { id, json } => {
            handle_player(&mut Roster::new(&mut store, MockSeed), id, json)?
        }
        Commands::Teams { query, json } => {
            handle_teams(&mut Roster::new(&mut store, MockSeed), query, json)?
        }
        Commands::Leaders {
            category,
            limit,
            json,
        } => handle_leaders(&mut Roster::new(&mut store, MockSeed), category, limit, json)?,
        Commands::Admin { cmd } => handle_admin(&mut store, MockSeed, cmd)?,
        Commands::Sync { api_url } => {
            handle_sync(&mut Roster::new(&mut store, MockSeed), api_url).await?
        }
    }

    Ok(())
}
