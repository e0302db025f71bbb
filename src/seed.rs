//! Seed data used when the store has no collections yet.
//!
//! The provider is handed to [`crate::roster::Roster`] at construction, so
//! tests and alternative front ends can supply their own fixtures.

use std::collections::BTreeMap;

use crate::cli::types::{BatSide, PlayerId, Position, TeamId, ThrowSide};
use crate::models::{
    CountingStats, Division, League, PitchingStats, Player, Stadium, Stats, Surface, Team,
    TeamColors,
};

/// Supplies the initial players and teams.
pub trait SeedProvider {
    fn players(&self) -> Vec<Player>;
    fn teams(&self) -> Vec<Team>;
}

/// Provider with no data at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySeed;

impl SeedProvider for EmptySeed {
    fn players(&self) -> Vec<Player> {
        Vec::new()
    }

    fn teams(&self) -> Vec<Team> {
        Vec::new()
    }
}

/// Built-in sample league: eight MLB clubs and ten of their players.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSeed;

impl SeedProvider for MockSeed {
    fn players(&self) -> Vec<Player> {
        vec![
            player("1", "Aaron Judge", 99, Position::RF, "1", "1992-04-26", "6'7\"", 282, BatSide::R,
                batting([106, 367, 79, 98, 16, 0, 37, 75, 88, 130, 3, 0, 3, 2])),
            player("2", "Shohei Ohtani", 17, Position::P, "2", "1994-07-05", "6'4\"", 210, BatSide::L,
                with_pitching(
                    batting([135, 497, 102, 151, 26, 8, 44, 95, 91, 143, 20, 6, 3, 3]),
                    PitchingStats {
                        wins: 10,
                        losses: 5,
                        saves: 0,
                        innings_pitched: 132.0,
                        hits_allowed: 85,
                        runs_allowed: 50,
                        earned_runs: 46,
                        walks_allowed: 55,
                        strikeouts_recorded: 167,
                    },
                )),
            player("3", "Mookie Betts", 50, Position::RF, "2", "1992-10-07", "5'9\"", 180, BatSide::R,
                batting([152, 584, 126, 179, 40, 1, 39, 107, 96, 107, 14, 3, 8, 5])),
            player("4", "Jose Altuve", 27, Position::SecondBase, "3", "1990-05-06", "5'6\"", 166, BatSide::R,
                batting([90, 360, 76, 112, 21, 1, 17, 51, 42, 63, 14, 3, 7, 1])),
            player("5", "Ronald Acuña Jr.", 13, Position::RF, "4", "1997-12-18", "6'0\"", 205, BatSide::R,
                batting([159, 643, 149, 217, 35, 4, 41, 106, 80, 84, 73, 14, 9, 3])),
            player("6", "Freddie Freeman", 5, Position::FirstBase, "2", "1989-09-12", "6'5\"", 220, BatSide::L,
                batting([161, 637, 131, 211, 59, 2, 29, 102, 72, 121, 23, 1, 16, 5])),
            player("7", "Randy Arozarena", 56, Position::LF, "5", "1995-02-28", "5'11\"", 185, BatSide::R,
                batting([151, 551, 95, 140, 19, 1, 23, 83, 80, 156, 22, 10, 12, 3])),
            player("8", "Brandon Crawford", 35, Position::SS, "6", "1987-01-21", "6'2\"", 223, BatSide::L,
                batting([94, 277, 30, 54, 9, 0, 7, 38, 27, 77, 3, 1, 2, 3])),
            player("9", "Vladimir Guerrero Jr.", 27, Position::FirstBase, "7", "1999-03-16", "6'2\"", 250, BatSide::R,
                batting([156, 602, 78, 159, 30, 0, 26, 94, 67, 100, 5, 2, 6, 7])),
            player("10", "Tim Anderson", 7, Position::SS, "8", "1993-06-23", "6'1\"", 185, BatSide::R,
                Stats::Unrecorded),
        ]
    }

    fn teams(&self) -> Vec<Team> {
        vec![
            team("1", "New York Yankees", "NYY", "New York", "NY", League::AL, Division::East, 1901,
                ("Yankee Stadium", 46_537, Surface::Grass, 2009), ("#003087", "#E4002C")),
            team("2", "Los Angeles Dodgers", "LAD", "Los Angeles", "CA", League::NL, Division::West, 1883,
                ("Dodger Stadium", 56_000, Surface::Grass, 1962), ("#005A9C", "#FFFFFF")),
            team("3", "Houston Astros", "HOU", "Houston", "TX", League::AL, Division::West, 1962,
                ("Minute Maid Park", 41_168, Surface::Grass, 2000), ("#002D62", "#EB6E1F")),
            team("4", "Atlanta Braves", "ATL", "Atlanta", "GA", League::NL, Division::East, 1871,
                ("Truist Park", 41_084, Surface::Grass, 2017), ("#CE1141", "#13274F")),
            team("5", "Tampa Bay Rays", "TB", "St. Petersburg", "FL", League::AL, Division::East, 1998,
                ("Tropicana Field", 25_000, Surface::Turf, 1990), ("#092C5C", "#8FBCE6")),
            team("6", "San Francisco Giants", "SF", "San Francisco", "CA", League::NL, Division::West, 1883,
                ("Oracle Park", 41_915, Surface::Grass, 2000), ("#FD5A1E", "#27251F")),
            team("7", "Toronto Blue Jays", "TOR", "Toronto", "ON", League::AL, Division::East, 1977,
                ("Rogers Centre", 49_282, Surface::Turf, 1989), ("#134A8E", "#1D2D5C")),
            team("8", "Chicago White Sox", "CWS", "Chicago", "IL", League::AL, Division::Central, 1901,
                ("Guaranteed Rate Field", 40_615, Surface::Grass, 1991), ("#27251F", "#C4CED4")),
        ]
    }
}

/// Team id → team name, for list and detail views.
pub fn team_names(teams: &[Team]) -> BTreeMap<TeamId, String> {
    teams.iter().map(|t| (t.id.clone(), t.name.clone())).collect()
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    number: u8,
    position: Position,
    team_id: &str,
    date_of_birth: &str,
    height: &str,
    weight: u16,
    bats: BatSide,
    statistics: Stats,
) -> Player {
    Player {
        id: PlayerId::new(id),
        name: name.to_string(),
        number,
        position,
        team_id: TeamId::new(team_id),
        date_of_birth: date_of_birth.to_string(),
        height: height.to_string(),
        weight,
        bats,
        throws: ThrowSide::R,
        statistics,
    }
}

/// G, AB, R, H, 2B, 3B, HR, RBI, BB, SO, SB, CS, HBP, SF
fn batting(line: [u32; 14]) -> Stats {
    let [games_played, at_bats, runs, hits, doubles, triples, home_runs, rbi, walks, strikeouts, stolen_bases, caught_stealing, hit_by_pitch, sacrifice_flies] =
        line;
    Stats::Recorded(CountingStats {
        games_played,
        at_bats,
        runs,
        hits,
        doubles,
        triples,
        home_runs,
        rbi,
        walks,
        strikeouts,
        stolen_bases,
        caught_stealing,
        hit_by_pitch,
        sacrifice_flies,
        pitching: None,
    })
}

fn with_pitching(stats: Stats, pitching: PitchingStats) -> Stats {
    match stats {
        Stats::Recorded(mut counting) => {
            counting.pitching = Some(pitching);
            Stats::Recorded(counting)
        }
        Stats::Unrecorded => Stats::Recorded(CountingStats {
            pitching: Some(pitching),
            ..Default::default()
        }),
    }
}

#[allow(clippy::too_many_arguments)]
fn team(
    id: &str,
    name: &str,
    abbreviation: &str,
    city: &str,
    state: &str,
    league: League,
    division: Division,
    founded: u16,
    (stadium_name, capacity, surface, year_opened): (&str, u32, Surface, u16),
    (primary, secondary): (&str, &str),
) -> Team {
    Team {
        id: TeamId::new(id),
        name: name.to_string(),
        abbreviation: abbreviation.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        league,
        division,
        founded,
        stadium: Stadium {
            name: stadium_name.to_string(),
            capacity,
            surface,
            year_opened,
        },
        colors: TeamColors {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: None,
        },
        logo_url: None,
        statistics: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_seed_is_consistent() {
        let players = MockSeed.players();
        let teams = MockSeed.teams();
        let names = team_names(&teams);

        assert_eq!(players.len(), 10);
        assert_eq!(teams.len(), 8);
        for p in &players {
            assert!(names.contains_key(&p.team_id), "{} has unknown team", p.name);
            if let Some(stats) = p.statistics.recorded() {
                assert!(stats.validate().is_ok(), "{} has an invalid line", p.name);
            }
        }
    }

    #[test]
    fn test_only_the_pitcher_has_a_pitching_line() {
        for p in MockSeed.players() {
            let pitches = p
                .statistics
                .recorded()
                .is_some_and(|s| s.pitching.is_some());
            assert_eq!(pitches, p.position.is_pitcher(), "{}", p.name);
        }
    }

    #[test]
    fn test_empty_seed() {
        assert!(EmptySeed.players().is_empty());
        assert!(EmptySeed.teams().is_empty());
    }
}
