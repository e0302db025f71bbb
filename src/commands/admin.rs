//! Admin commands: login/logout and editing players, teams and statistics.
//!
//! Every command other than `login`, `logout` and `status` needs a current
//! admin session.

use tracing::debug;

use crate::{
    auth::AuthService,
    cli::{
        types::{BatSide, Position, TeamId, ThrowSide},
        AdminCmd, AdminPlayerCmd, AdminStatsCmd, AdminTeamCmd, BattingFields, PitchingFields,
        PlayerFields, TeamFields,
    },
    models::{
        AdminCredentials, CountingStats, Player, PlayerDraft, Stadium, Stats, Surface, Team,
        TeamColors, TeamDraft,
    },
    roster::Roster,
    seed::SeedProvider,
    storage::Store,
    util::current_year,
    Result,
};

pub fn handle_admin<S: Store, P: SeedProvider>(store: &mut S, seed: P, cmd: AdminCmd) -> Result<()> {
    let mut auth = AuthService::new(&mut *store);
    match cmd {
        AdminCmd::Login { username, password } => {
            let session = auth.login(&AdminCredentials { username, password })?;
            println!("✓ Logged in as {}", session.admin.username);
            return Ok(());
        }
        AdminCmd::Logout => {
            auth.logout()?;
            println!("✓ Logged out");
            return Ok(());
        }
        AdminCmd::Status => {
            match auth.current_session()? {
                Some(session) => println!(
                    "Logged in as {} <{}>",
                    session.admin.username, session.admin.email
                ),
                None => println!("Not logged in"),
            }
            return Ok(());
        }
        _ => {}
    }

    let session = auth.require_session()?;
    debug!(admin = %session.admin.username, "admin command authorized");
    let mut roster = Roster::new(&mut *store, seed);

    match cmd {
        AdminCmd::Player { cmd } => handle_player_cmd(&mut roster, cmd),
        AdminCmd::Team { cmd } => handle_team_cmd(&mut roster, cmd),
        AdminCmd::Stats { cmd } => handle_stats_cmd(&mut roster, cmd),
        AdminCmd::Login { .. } | AdminCmd::Logout | AdminCmd::Status => Ok(()),
    }
}

fn handle_player_cmd<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    cmd: AdminPlayerCmd,
) -> Result<()> {
    match cmd {
        AdminPlayerCmd::Add { fields } => {
            let draft = player_draft(fields, None);
            draft.validate()?;
            roster.team(&draft.team_id)?;
            let player = roster.create_player(draft)?;
            println!("✓ Added {} ({})", player.name, player.id);
        }
        AdminPlayerCmd::Edit { id, fields } => {
            let current = roster.player(&id)?;
            let draft = player_draft(fields, Some(&current));
            if draft.team_id != current.team_id {
                roster.team(&draft.team_id)?;
            }
            let player = roster.update_player(&id, draft)?;
            println!("✓ Updated {} ({})", player.name, player.id);
        }
        AdminPlayerCmd::Delete { id } => {
            let player = roster.delete_player(&id)?;
            println!("✓ Deleted {} ({})", player.name, player.id);
        }
    }
    Ok(())
}

fn handle_team_cmd<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    cmd: AdminTeamCmd,
) -> Result<()> {
    match cmd {
        AdminTeamCmd::Add { fields } => {
            let team = roster.create_team(team_draft(fields, None))?;
            println!("✓ Added {} [{}] ({})", team.name, team.abbreviation, team.id);
        }
        AdminTeamCmd::Edit { id, fields } => {
            let current = roster.team(&id)?;
            let team = roster.update_team(&id, team_draft(fields, Some(&current)))?;
            println!("✓ Updated {} [{}]", team.name, team.abbreviation);
        }
        AdminTeamCmd::Delete { id } => {
            let team = roster.delete_team(&id)?;
            let orphans = roster.players_on(&id)?.len();
            println!("✓ Deleted {} ({})", team.name, team.id);
            if orphans > 0 {
                println!("  {orphans} player(s) still reference team {id}");
            }
        }
    }
    Ok(())
}

fn handle_stats_cmd<S: Store, P: SeedProvider>(
    roster: &mut Roster<S, P>,
    cmd: AdminStatsCmd,
) -> Result<()> {
    match cmd {
        AdminStatsCmd::Player {
            id,
            batting,
            pitching,
            clear,
        } => {
            let stats = if clear {
                Stats::Unrecorded
            } else {
                let current = roster.player(&id)?;
                Stats::Recorded(merge_stats(batting, pitching, current.statistics.recorded()))
            };
            let player = roster.update_player_stats(&id, stats)?;
            match player.statistics.derived() {
                Some(derived) => println!(
                    "✓ Saved stats for {}: AVG {:.3}  OBP {:.3}  SLG {:.3}",
                    player.name,
                    derived.batting_average,
                    derived.on_base_percentage,
                    derived.slugging_percentage
                ),
                None => println!("✓ Cleared stats for {}", player.name),
            }
        }
        AdminStatsCmd::Team {
            id,
            wins,
            losses,
            runs_scored,
            runs_allowed,
        } => {
            let team = roster.update_team_stats(&id, wins, losses, runs_scored, runs_allowed)?;
            if let Some(stats) = &team.statistics {
                println!(
                    "✓ Saved {} record {}-{} ({:.3}), run differential {:+}",
                    team.name, stats.wins, stats.losses, stats.win_percentage, stats.run_differential
                );
            }
        }
    }
    Ok(())
}

/// Build a player draft from CLI flags, falling back to `base` for
/// anything not given.
pub fn player_draft(fields: PlayerFields, base: Option<&Player>) -> PlayerDraft {
    PlayerDraft {
        name: fields
            .name
            .or_else(|| base.map(|p| p.name.clone()))
            .unwrap_or_default(),
        number: fields.number.or(base.map(|p| p.number)).unwrap_or(0),
        position: fields
            .position
            .or(base.map(|p| p.position))
            .unwrap_or(Position::DH),
        team_id: fields
            .team
            .or_else(|| base.map(|p| p.team_id.clone()))
            .unwrap_or_else(|| TeamId::new("")),
        date_of_birth: fields
            .dob
            .or_else(|| base.map(|p| p.date_of_birth.clone()))
            .unwrap_or_default(),
        height: fields
            .height
            .or_else(|| base.map(|p| p.height.clone()))
            .unwrap_or_default(),
        weight: fields.weight.or(base.map(|p| p.weight)).unwrap_or(0),
        bats: fields.bats.or(base.map(|p| p.bats)).unwrap_or(BatSide::R),
        throws: fields
            .throws
            .or(base.map(|p| p.throws))
            .unwrap_or(ThrowSide::R),
    }
}

/// Build a team draft from CLI flags. Stadium and colors are only sent when
/// one of their flags is given, merged over `base`.
pub fn team_draft(fields: TeamFields, base: Option<&Team>) -> TeamDraft {
    let stadium = if fields.stadium.is_some()
        || fields.capacity.is_some()
        || fields.surface.is_some()
        || fields.year_opened.is_some()
    {
        let current = base.map(|t| &t.stadium);
        Some(Stadium {
            name: fields
                .stadium
                .or_else(|| current.map(|s| s.name.clone()))
                .unwrap_or_else(|| "Stadium".to_string()),
            capacity: fields.capacity.or(current.map(|s| s.capacity)).unwrap_or(0),
            surface: fields
                .surface
                .or(current.map(|s| s.surface))
                .unwrap_or(Surface::Grass),
            year_opened: fields
                .year_opened
                .or(current.map(|s| s.year_opened))
                .unwrap_or_else(current_year),
        })
    } else {
        None
    };

    let colors = if fields.primary_color.is_some() || fields.secondary_color.is_some() {
        let current = base.map_or_else(TeamColors::default, |t| t.colors.clone());
        Some(TeamColors {
            primary: fields.primary_color.unwrap_or(current.primary),
            secondary: fields.secondary_color.unwrap_or(current.secondary),
            accent: current.accent,
        })
    } else {
        None
    };

    TeamDraft {
        name: fields
            .name
            .or_else(|| base.map(|t| t.name.clone()))
            .unwrap_or_default(),
        abbreviation: fields
            .abbreviation
            .or_else(|| base.map(|t| t.abbreviation.clone()))
            .unwrap_or_default(),
        city: fields.city,
        state: fields.state,
        league: fields.league,
        division: fields.division,
        founded: fields.founded,
        stadium,
        colors,
        logo_url: None,
    }
}

fn set(slot: &mut u32, value: Option<u32>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Overlay the given counts on `base` (or an empty line). Any pitching flag
/// creates the pitching block if the player had none.
pub fn merge_stats(
    batting: BattingFields,
    pitching: PitchingFields,
    base: Option<&CountingStats>,
) -> CountingStats {
    let mut stats = base.cloned().unwrap_or_default();
    set(&mut stats.games_played, batting.games);
    set(&mut stats.at_bats, batting.at_bats);
    set(&mut stats.runs, batting.runs);
    set(&mut stats.hits, batting.hits);
    set(&mut stats.doubles, batting.doubles);
    set(&mut stats.triples, batting.triples);
    set(&mut stats.home_runs, batting.home_runs);
    set(&mut stats.rbi, batting.rbi);
    set(&mut stats.walks, batting.walks);
    set(&mut stats.strikeouts, batting.strikeouts);
    set(&mut stats.stolen_bases, batting.stolen_bases);
    set(&mut stats.caught_stealing, batting.caught_stealing);
    set(&mut stats.hit_by_pitch, batting.hit_by_pitch);
    set(&mut stats.sacrifice_flies, batting.sacrifice_flies);

    let touches_pitching = pitching.wins.is_some()
        || pitching.losses.is_some()
        || pitching.saves.is_some()
        || pitching.innings_pitched.is_some()
        || pitching.hits_allowed.is_some()
        || pitching.runs_allowed.is_some()
        || pitching.earned_runs.is_some()
        || pitching.walks_allowed.is_some()
        || pitching.pitching_strikeouts.is_some();
    if touches_pitching {
        let mut line = stats.pitching.take().unwrap_or_default();
        set(&mut line.wins, pitching.wins);
        set(&mut line.losses, pitching.losses);
        set(&mut line.saves, pitching.saves);
        if let Some(ip) = pitching.innings_pitched {
            line.innings_pitched = ip;
        }
        set(&mut line.hits_allowed, pitching.hits_allowed);
        set(&mut line.runs_allowed, pitching.runs_allowed);
        set(&mut line.earned_runs, pitching.earned_runs);
        set(&mut line.walks_allowed, pitching.walks_allowed);
        set(&mut line.strikeouts_recorded, pitching.pitching_strikeouts);
        stats.pitching = Some(line);
    }
    stats
}
