//! Read-only commands: player and team listings, player detail, leaders.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::{
    cli::types::{PlayerId, Position, StatCategory, TeamId},
    models::{Division, League, Player},
    roster::Roster,
    search::{filter_players, filter_teams},
    seed::{team_names, SeedProvider},
    stats::{leaders, DerivedStats},
    storage::Store,
    Result,
};

use super::common::{format_category_value, format_rate, print_json};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub id: PlayerId,
    pub name: String,
    pub number: u8,
    pub position: Position,
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DerivedStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    #[serde(flatten)]
    pub player: Player,
    pub team: Option<String>,
    pub age: Option<u32>,
    pub derived: Option<DerivedStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub league: League,
    pub division: Division,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub win_percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderRow {
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub team: Option<String>,
    pub value: f64,
}

/// Players matching `query`, optionally limited to one team.
pub fn player_rows<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    query: Option<&str>,
    team: Option<&TeamId>,
) -> Result<Vec<PlayerRow>> {
    if let Some(team) = team {
        // unknown team ids are an error rather than an empty list
        roster.team(team)?;
    }
    let players = roster.players()?;
    let names = team_names(&roster.teams()?);

    Ok(filter_players(&players, query.unwrap_or(""), &names)
        .into_iter()
        .filter(|p| team.map_or(true, |t| &p.team_id == t))
        .map(|p| PlayerRow {
            id: p.id.clone(),
            name: p.name.clone(),
            number: p.number,
            position: p.position,
            team: names.get(&p.team_id).cloned(),
            stats: p.statistics.derived(),
        })
        .collect())
}

pub fn player_detail<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    id: &PlayerId,
    today: NaiveDate,
) -> Result<PlayerDetail> {
    let player = roster.player(id)?;
    let team = roster.team(&player.team_id).ok().map(|t| t.name);
    Ok(PlayerDetail {
        age: player.age_on(today),
        derived: player.statistics.derived(),
        team,
        player,
    })
}

pub fn team_rows<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    query: Option<&str>,
) -> Result<Vec<TeamRow>> {
    let teams = roster.teams()?;
    Ok(filter_teams(&teams, query.unwrap_or(""))
        .into_iter()
        .map(|t| TeamRow {
            id: t.id.clone(),
            name: t.name.clone(),
            abbreviation: t.abbreviation.clone(),
            league: t.league,
            division: t.division,
            wins: t.statistics.as_ref().map(|s| s.wins),
            losses: t.statistics.as_ref().map(|s| s.losses),
            win_percentage: t.statistics.as_ref().map(|s| s.win_percentage),
        })
        .collect())
}

/// Top `limit` players in `category`.
pub fn leader_rows<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    category: StatCategory,
    limit: usize,
) -> Result<Vec<LeaderRow>> {
    let players = roster.players()?;
    let names = team_names(&roster.teams()?);

    Ok(leaders(&players, category, limit)
        .into_iter()
        .map(|entry| LeaderRow {
            rank: entry.rank,
            player_id: entry.entity.id.clone(),
            name: entry.entity.name.clone(),
            team: names.get(&entry.entity.team_id).cloned(),
            value: entry.stat_value,
        })
        .collect())
}

pub fn handle_players<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    query: Option<String>,
    team: Option<TeamId>,
    as_json: bool,
) -> Result<()> {
    let rows = player_rows(roster, query.as_deref(), team.as_ref())?;
    if as_json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No players found");
        return Ok(());
    }
    for row in &rows {
        let avg = row
            .stats
            .map_or_else(|| "-".to_string(), |s| format_rate(s.batting_average));
        println!(
            "{:>4}  #{:<3} {:<24} {:<3} {:<24} AVG {}",
            row.id.as_str(),
            row.number,
            row.name,
            row.position.to_string(),
            row.team.as_deref().unwrap_or("-"),
            avg
        );
    }
    Ok(())
}

pub fn handle_player<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    id: PlayerId,
    as_json: bool,
) -> Result<()> {
    let detail = player_detail(roster, &id, Utc::now().date_naive())?;
    if as_json {
        return print_json(&detail);
    }

    let p = &detail.player;
    println!("{} #{} ({})", p.name, p.number, p.position.description());
    println!("Team: {}", detail.team.as_deref().unwrap_or("-"));
    match detail.age {
        Some(age) => println!("Born: {} (age {})", p.date_of_birth, age),
        None => println!("Born: {}", p.date_of_birth),
    }
    println!("Height/Weight: {} / {} lbs", p.height, p.weight);
    println!("Bats/Throws: {}/{}", p.bats, p.throws);

    let (Some(stats), Some(derived)) = (p.statistics.recorded(), detail.derived) else {
        println!("No statistics recorded");
        return Ok(());
    };
    println!();
    println!(
        "G {}  AB {}  R {}  H {}  2B {}  3B {}  HR {}  RBI {}  BB {}  SO {}  SB {}",
        stats.games_played,
        stats.at_bats,
        stats.runs,
        stats.hits,
        stats.doubles,
        stats.triples,
        stats.home_runs,
        stats.rbi,
        stats.walks,
        stats.strikeouts,
        stats.stolen_bases
    );
    println!(
        "AVG {}  OBP {}  SLG {}  OPS {}",
        format_rate(derived.batting_average),
        format_rate(derived.on_base_percentage),
        format_rate(derived.slugging_percentage),
        format_rate(derived.ops)
    );
    if let (Some(pitching), Some(era), Some(whip)) = (&stats.pitching, derived.era, derived.whip) {
        println!(
            "W-L {}-{}  SV {}  IP {}  SO {}  ERA {:.2}  WHIP {:.2}",
            pitching.wins,
            pitching.losses,
            pitching.saves,
            pitching.innings_pitched,
            pitching.strikeouts_recorded,
            era,
            whip
        );
    }
    Ok(())
}

pub fn handle_teams<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    query: Option<String>,
    as_json: bool,
) -> Result<()> {
    let rows = team_rows(roster, query.as_deref())?;
    if as_json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No teams found");
        return Ok(());
    }
    for row in &rows {
        let record = match (row.wins, row.losses) {
            (Some(w), Some(l)) => format!("{w}-{l}"),
            _ => "-".to_string(),
        };
        println!(
            "{:>4}  {:<4} {:<24} {} {:<8} {}",
            row.id.as_str(),
            row.abbreviation,
            row.name,
            row.league,
            row.division.to_string(),
            record
        );
    }
    Ok(())
}

pub fn handle_leaders<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    category: StatCategory,
    limit: usize,
    as_json: bool,
) -> Result<()> {
    let rows = leader_rows(roster, category, limit)?;
    if as_json {
        return print_json(&rows);
    }
    if rows.is_empty() {
        println!("No players with a recorded {category}");
        return Ok(());
    }
    println!("{category} leaders");
    for row in &rows {
        println!(
            "{:>3}. {:<24} {:<24} {}",
            row.rank,
            row.name,
            row.team.as_deref().unwrap_or("-"),
            format_category_value(category, row.value)
        );
    }
    Ok(())
}
