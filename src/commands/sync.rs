//! Sync command: replace the stored collections with the remote API's.

use tracing::info;

use crate::{api::ApiClient, roster::Roster, seed::SeedProvider, storage::Store, Result};

use super::resolve_api_url;

/// Counts written by a successful sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub teams: usize,
    pub players: usize,
}

/// Fetch teams and players and save both. Nothing is written if either
/// request fails.
pub async fn sync_from_api<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    client: &ApiClient,
) -> Result<SyncSummary> {
    let teams = client.fetch_teams().await?;
    let players = client.fetch_players(None).await?;
    roster.replace_all(&players, &teams)?;

    info!(base_url = client.base_url(), teams = teams.len(), players = players.len(), "sync complete");
    Ok(SyncSummary {
        teams: teams.len(),
        players: players.len(),
    })
}

pub async fn handle_sync<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    api_url: Option<String>,
) -> Result<()> {
    let base_url = resolve_api_url(api_url);
    println!("Fetching teams and players from {base_url}...");

    let client = ApiClient::with_base_url(&base_url)?;
    let summary = sync_from_api(roster, &client).await?;

    println!(
        "✓ Saved {} teams and {} players",
        summary.teams, summary.players
    );
    Ok(())
}
