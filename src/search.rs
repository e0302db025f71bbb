//! Case-insensitive text search over players and teams.

use std::collections::BTreeMap;

use crate::{
    cli::types::TeamId,
    models::{Player, Team},
};

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Players whose name, position or team name contains `query`.
///
/// A blank query keeps every player. `team_names` maps team ids to display
/// names; players on unknown teams can still match on name or position.
pub fn filter_players<'a>(
    players: &'a [Player],
    query: &str,
    team_names: &BTreeMap<TeamId, String>,
) -> Vec<&'a Player> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return players.iter().collect();
    }

    players
        .iter()
        .filter(|player| {
            matches(&player.name, &needle)
                || matches(&player.position.to_string(), &needle)
                || team_names
                    .get(&player.team_id)
                    .is_some_and(|team| matches(team, &needle))
        })
        .collect()
}

/// Teams whose name or abbreviation contains `query`.
pub fn filter_teams<'a>(teams: &'a [Team], query: &str) -> Vec<&'a Team> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return teams.iter().collect();
    }

    teams
        .iter()
        .filter(|team| matches(&team.name, &needle) || matches(&team.abbreviation, &needle))
        .collect()
}
