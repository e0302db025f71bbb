//! Player and team collections persisted in a [`Store`].
//!
//! Collections are read and written whole. On first read an empty store is
//! populated from the [`SeedProvider`], so every later read and edit works
//! against the same saved copy.


use tracing::{debug, info};

use crate::{
    cli::types::{PlayerId, TeamId},
    models::{Player, PlayerDraft, Stats, Team, TeamDraft, TeamStatistics},
    seed::SeedProvider,
    storage::{keys, load, save, Store},
    util::{current_year, now_millis},
    Result, StatsError,
};

pub struct Roster<S: Store, P: SeedProvider> {
    store: S,
    seed: P,
}

impl<S: Store, P: SeedProvider> Roster<S, P> {
    pub fn new(store: S, seed: P) -> Self {
        Self { store, seed }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// All players, seeding the store if it has none yet.
    pub fn players(&mut self) -> Result<Vec<Player>> {
        if let Some(players) = load::<Vec<Player>, _>(&self.store, keys::PLAYERS)? {
            return Ok(players);
        }
        let players = self.seed.players();
        info!(count = players.len(), "seeding players");
        save(&mut self.store, keys::PLAYERS, &players)?;
        Ok(players)
    }

    /// All teams, seeding the store if it has none yet.
    pub fn teams(&mut self) -> Result<Vec<Team>> {
        if let Some(teams) = load::<Vec<Team>, _>(&self.store, keys::TEAMS)? {
            return Ok(teams);
        }
        let teams = self.seed.teams();
        info!(count = teams.len(), "seeding teams");
        save(&mut self.store, keys::TEAMS, &teams)?;
        Ok(teams)
    }

    pub fn player(&mut self, id: &PlayerId) -> Result<Player> {
        self.players()?
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| player_not_found(id))
    }

    pub fn team(&mut self, id: &TeamId) -> Result<Team> {
        self.teams()?
            .into_iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| team_not_found(id))
    }

    /// Players whose `team_id` is `team`.
    pub fn players_on(&mut self, team: &TeamId) -> Result<Vec<Player>> {
        Ok(self
            .players()?
            .into_iter()
            .filter(|p| &p.team_id == team)
            .collect())
    }

    /// Replace both collections, e.g. after a remote sync. Both are written
    /// in one batch, so a failure leaves the previous collections in place.
    pub fn replace_all(&mut self, players: &[Player], teams: &[Team]) -> Result<()> {
        let teams_json = serde_json::to_string(teams)?;
        let players_json = serde_json::to_string(players)?;
        self.store.set_all(&[
            (keys::TEAMS, teams_json.as_str()),
            (keys::PLAYERS, players_json.as_str()),
        ])?;
        info!(players = players.len(), teams = teams.len(), "collections replaced");
        Ok(())
    }

    pub fn create_player(&mut self, draft: PlayerDraft) -> Result<Player> {
        draft.validate()?;
        let mut players = self.players()?;
        let id = PlayerId::new(next_id("player", players.iter().map(|p| p.id.as_str())));
        let player = draft.into_player(id, Stats::Unrecorded);

        players.push(player.clone());
        save(&mut self.store, keys::PLAYERS, &players)?;
        info!(id = %player.id, name = %player.name, "player created");
        Ok(player)
    }

    /// Replace a player's profile; recorded statistics are kept.
    pub fn update_player(&mut self, id: &PlayerId, draft: PlayerDraft) -> Result<Player> {
        draft.validate()?;
        let mut players = self.players()?;
        let slot = players
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| player_not_found(id))?;

        let statistics = std::mem::take(&mut slot.statistics);
        *slot = draft.into_player(id.clone(), statistics);
        let updated = slot.clone();

        save(&mut self.store, keys::PLAYERS, &players)?;
        info!(id = %id, "player updated");
        Ok(updated)
    }

    pub fn delete_player(&mut self, id: &PlayerId) -> Result<Player> {
        let mut players = self.players()?;
        let index = players
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| player_not_found(id))?;
        let removed = players.remove(index);

        save(&mut self.store, keys::PLAYERS, &players)?;
        info!(id = %id, name = %removed.name, "player deleted");
        Ok(removed)
    }

    /// Overwrite a player's season line after checking it is consistent.
    pub fn update_player_stats(&mut self, id: &PlayerId, stats: Stats) -> Result<Player> {
        if let Some(counting) = stats.recorded() {
            counting.validate()?;
        }
        let mut players = self.players()?;
        let slot = players
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| player_not_found(id))?;
        slot.statistics = stats;
        let updated = slot.clone();

        save(&mut self.store, keys::PLAYERS, &players)?;
        debug!(id = %id, "player statistics saved");
        Ok(updated)
    }

    pub fn create_team(&mut self, draft: TeamDraft) -> Result<Team> {
        draft.validate()?;
        let mut teams = self.teams()?;
        let id = TeamId::new(next_id("team", teams.iter().map(|t| t.id.as_str())));
        let team = draft.into_team(id, current_year());

        teams.push(team.clone());
        save(&mut self.store, keys::TEAMS, &teams)?;
        info!(id = %team.id, name = %team.name, "team created");
        Ok(team)
    }

    pub fn update_team(&mut self, id: &TeamId, draft: TeamDraft) -> Result<Team> {
        draft.validate()?;
        let mut teams = self.teams()?;
        let slot = teams
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| team_not_found(id))?;
        draft.apply_to(slot);
        let updated = slot.clone();

        save(&mut self.store, keys::TEAMS, &teams)?;
        info!(id = %id, "team updated");
        Ok(updated)
    }

    /// Remove a team. Its players are left in place with a dangling team id.
    pub fn delete_team(&mut self, id: &TeamId) -> Result<Team> {
        let mut teams = self.teams()?;
        let index = teams
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| team_not_found(id))?;
        let removed = teams.remove(index);

        save(&mut self.store, keys::TEAMS, &teams)?;
        info!(id = %id, name = %removed.name, "team deleted");
        Ok(removed)
    }

    /// Record a team's won-lost record and run totals for the current season.
    pub fn update_team_stats(
        &mut self,
        id: &TeamId,
        wins: u32,
        losses: u32,
        runs_scored: u32,
        runs_allowed: u32,
    ) -> Result<Team> {
        let mut teams = self.teams()?;
        let slot = teams
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| team_not_found(id))?;

        // Other season fields (team ERA, fielding) are kept as they were.
        let record = match slot.statistics.take() {
            Some(previous) => {
                let fresh = TeamStatistics::from_record(
                    previous.season,
                    wins,
                    losses,
                    runs_scored,
                    runs_allowed,
                );
                TeamStatistics {
                    wins: fresh.wins,
                    losses: fresh.losses,
                    win_percentage: fresh.win_percentage,
                    runs_scored: fresh.runs_scored,
                    runs_allowed: fresh.runs_allowed,
                    run_differential: fresh.run_differential,
                    ..previous
                }
            }
            None => TeamStatistics::from_record(
                current_year(),
                wins,
                losses,
                runs_scored,
                runs_allowed,
            ),
        };
        slot.statistics = Some(record);
        let updated = slot.clone();

        save(&mut self.store, keys::TEAMS, &teams)?;
        debug!(id = %id, wins, losses, "team statistics saved");
        Ok(updated)
    }
}

fn player_not_found(id: &PlayerId) -> StatsError {
    StatsError::PlayerNotFound { id: id.to_string() }
}

fn team_not_found(id: &TeamId) -> StatsError {
    StatsError::TeamNotFound { id: id.to_string() }
}

/// `<prefix>_<millis>`, bumped until it collides with none of `existing`.
fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let taken: std::collections::HashSet<&str> = existing.collect();
    let mut stamp = now_millis();
    loop {
        let candidate = format!("{prefix}_{stamp}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        stamp += 1;
    }
}
