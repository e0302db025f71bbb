//! Player records and their season statistics.

use crate::cli::types::{BatSide, PlayerId, Position, TeamId, ThrowSide};
use crate::error::{Result, StatsError};
use crate::stats::compute::DerivedStats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rostered baseball player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub number: u8,
    pub position: Position,
    pub team_id: TeamId,
    pub date_of_birth: String,
    /// e.g. `6'2"`
    pub height: String,
    /// Pounds
    pub weight: u16,
    pub bats: BatSide,
    pub throws: ThrowSide,
    #[serde(default, skip_serializing_if = "Stats::is_unrecorded")]
    pub statistics: Stats,
}

impl Player {
    /// Age in whole years on `today`, or `None` if the birth date is not
    /// a `YYYY-MM-DD` date.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = NaiveDate::parse_from_str(&self.date_of_birth, "%Y-%m-%d").ok()?;
        today.years_since(born)
    }
}

/// Whether a player has a statistics line for the season.
///
/// Serialized as an optional `statistics` object so stored collections
/// without stats still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<CountingStats>", into = "Option<CountingStats>")]
pub enum Stats {
    #[default]
    Unrecorded,
    Recorded(CountingStats),
}

impl Stats {
    pub fn is_unrecorded(&self) -> bool {
        matches!(self, Stats::Unrecorded)
    }

    pub fn recorded(&self) -> Option<&CountingStats> {
        match self {
            Stats::Recorded(stats) => Some(stats),
            Stats::Unrecorded => None,
        }
    }

    pub fn derived(&self) -> Option<DerivedStats> {
        self.recorded().map(DerivedStats::from_counting)
    }
}

impl From<Option<CountingStats>> for Stats {
    fn from(value: Option<CountingStats>) -> Self {
        value.map_or(Stats::Unrecorded, Stats::Recorded)
    }
}

impl From<Stats> for Option<CountingStats> {
    fn from(value: Stats) -> Self {
        match value {
            Stats::Recorded(stats) => Some(stats),
            Stats::Unrecorded => None,
        }
    }
}

/// Raw accumulated counts for one player-season.
///
/// Missing counts deserialize as zero, matching how the admin stats form
/// fills untouched fields. Pitching counts sit flat beside the batting
/// counts in JSON; any of them present makes a pitching line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StatisticsRecord", into = "StatisticsRecord")]
pub struct CountingStats {
    pub games_played: u32,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub rbi: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub stolen_bases: u32,
    pub caught_stealing: u32,
    pub hit_by_pitch: u32,
    pub sacrifice_flies: u32,
    pub pitching: Option<PitchingStats>,
}

impl CountingStats {
    /// Hits that were not doubles, triples or home runs.
    pub fn singles(&self) -> u32 {
        self.hits
            .saturating_sub(self.doubles)
            .saturating_sub(self.triples)
            .saturating_sub(self.home_runs)
    }

    /// Reject lines that cannot come from a real box score.
    ///
    /// Counts are unsigned so negatives never reach this point; what is left
    /// to check is internal consistency and the innings value.
    pub fn validate(&self) -> Result<()> {
        if self.hits > self.at_bats {
            return Err(StatsError::invalid_input(
                "hits",
                format!("exceeds at bats ({} > {})", self.hits, self.at_bats),
            ));
        }
        let extra_base_hits = u64::from(self.doubles) + u64::from(self.triples) + u64::from(self.home_runs);
        if extra_base_hits > u64::from(self.hits) {
            return Err(StatsError::invalid_input(
                "hits",
                format!(
                    "fewer than doubles + triples + home runs ({} < {})",
                    self.hits, extra_base_hits
                ),
            ));
        }
        if let Some(pitching) = &self.pitching {
            pitching.validate()?;
        }
        Ok(())
    }
}

/// Pitching line, present only for players who have pitched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStats {
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    /// Plain decimal innings; `6.1` is 6.1 innings, not 6 1/3.
    pub innings_pitched: f64,
    pub hits_allowed: u32,
    pub runs_allowed: u32,
    pub earned_runs: u32,
    pub walks_allowed: u32,
    pub strikeouts_recorded: u32,
}

impl PitchingStats {
    pub fn validate(&self) -> Result<()> {
        if !self.innings_pitched.is_finite() {
            return Err(StatsError::invalid_input(
                "innings pitched",
                "must be a finite number",
            ));
        }
        if self.innings_pitched < 0.0 {
            return Err(StatsError::invalid_input(
                "innings pitched",
                format!("must not be negative ({})", self.innings_pitched),
            ));
        }
        if self.earned_runs > self.runs_allowed {
            return Err(StatsError::invalid_input(
                "earned runs",
                format!(
                    "exceeds runs allowed ({} > {})",
                    self.earned_runs, self.runs_allowed
                ),
            ));
        }
        Ok(())
    }
}

/// Stored and served shape of a `statistics` object.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StatisticsRecord {
    games_played: u32,
    at_bats: u32,
    runs: u32,
    hits: u32,
    doubles: u32,
    triples: u32,
    home_runs: u32,
    rbi: u32,
    walks: u32,
    strikeouts: u32,
    stolen_bases: u32,
    caught_stealing: u32,
    hit_by_pitch: u32,
    sacrifice_flies: u32,
    #[serde(flatten)]
    pitching: PitchingRecord,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PitchingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    wins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    losses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saves: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    innings_pitched: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hits_allowed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    runs_allowed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    earned_runs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    walks_allowed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strikeouts_recorded: Option<u32>,
}

impl PitchingRecord {
    fn is_empty(&self) -> bool {
        self.wins.is_none()
            && self.losses.is_none()
            && self.saves.is_none()
            && self.innings_pitched.is_none()
            && self.hits_allowed.is_none()
            && self.runs_allowed.is_none()
            && self.earned_runs.is_none()
            && self.walks_allowed.is_none()
            && self.strikeouts_recorded.is_none()
    }
}

impl From<PitchingRecord> for Option<PitchingStats> {
    fn from(record: PitchingRecord) -> Self {
        if record.is_empty() {
            return None;
        }
        Some(PitchingStats {
            wins: record.wins.unwrap_or_default(),
            losses: record.losses.unwrap_or_default(),
            saves: record.saves.unwrap_or_default(),
            innings_pitched: record.innings_pitched.unwrap_or_default(),
            hits_allowed: record.hits_allowed.unwrap_or_default(),
            runs_allowed: record.runs_allowed.unwrap_or_default(),
            earned_runs: record.earned_runs.unwrap_or_default(),
            walks_allowed: record.walks_allowed.unwrap_or_default(),
            strikeouts_recorded: record.strikeouts_recorded.unwrap_or_default(),
        })
    }
}

impl From<Option<PitchingStats>> for PitchingRecord {
    fn from(pitching: Option<PitchingStats>) -> Self {
        match pitching {
            Some(p) => PitchingRecord {
                wins: Some(p.wins),
                losses: Some(p.losses),
                saves: Some(p.saves),
                innings_pitched: Some(p.innings_pitched),
                hits_allowed: Some(p.hits_allowed),
                runs_allowed: Some(p.runs_allowed),
                earned_runs: Some(p.earned_runs),
                walks_allowed: Some(p.walks_allowed),
                strikeouts_recorded: Some(p.strikeouts_recorded),
            },
            None => PitchingRecord::default(),
        }
    }
}

impl From<StatisticsRecord> for CountingStats {
    fn from(record: StatisticsRecord) -> Self {
        CountingStats {
            games_played: record.games_played,
            at_bats: record.at_bats,
            runs: record.runs,
            hits: record.hits,
            doubles: record.doubles,
            triples: record.triples,
            home_runs: record.home_runs,
            rbi: record.rbi,
            walks: record.walks,
            strikeouts: record.strikeouts,
            stolen_bases: record.stolen_bases,
            caught_stealing: record.caught_stealing,
            hit_by_pitch: record.hit_by_pitch,
            sacrifice_flies: record.sacrifice_flies,
            pitching: record.pitching.into(),
        }
    }
}

impl From<CountingStats> for StatisticsRecord {
    fn from(stats: CountingStats) -> Self {
        StatisticsRecord {
            games_played: stats.games_played,
            at_bats: stats.at_bats,
            runs: stats.runs,
            hits: stats.hits,
            doubles: stats.doubles,
            triples: stats.triples,
            home_runs: stats.home_runs,
            rbi: stats.rbi,
            walks: stats.walks,
            strikeouts: stats.strikeouts,
            stolen_bases: stats.stolen_bases,
            caught_stealing: stats.caught_stealing,
            hit_by_pitch: stats.hit_by_pitch,
            sacrifice_flies: stats.sacrifice_flies,
            pitching: stats.pitching.into(),
        }
    }
}

/// Fields an admin supplies when creating or editing a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDraft {
    pub name: String,
    pub number: u8,
    pub position: Position,
    pub team_id: TeamId,
    pub date_of_birth: String,
    pub height: String,
    pub weight: u16,
    pub bats: BatSide,
    pub throws: ThrowSide,
}

impl PlayerDraft {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StatsError::MissingField {
                field: "name".to_string(),
            });
        }
        if self.team_id.as_str().trim().is_empty() {
            return Err(StatsError::MissingField {
                field: "teamId".to_string(),
            });
        }
        Ok(())
    }

    pub fn into_player(self, id: PlayerId, statistics: Stats) -> Player {
        Player {
            id,
            name: self.name.trim().to_string(),
            number: self.number,
            position: self.position,
            team_id: self.team_id,
            date_of_birth: self.date_of_birth,
            height: self.height,
            weight: self.weight,
            bats: self.bats,
            throws: self.throws,
            statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_without_statistics_deserializes_unrecorded() {
        let player: Player = serde_json::from_value(json!({
            "id": "1",
            "name": "Aaron Judge",
            "number": 99,
            "position": "RF",
            "teamId": "1",
            "dateOfBirth": "1992-04-26",
            "height": "6'7\"",
            "weight": 282,
            "bats": "R",
            "throws": "R"
        }))
        .unwrap();

        assert_eq!(player.statistics, Stats::Unrecorded);
        assert!(player.statistics.derived().is_none());

        let value = serde_json::to_value(&player).unwrap();
        assert!(value.get("statistics").is_none());
    }

    #[test]
    fn test_age_on() {
        let mut player: Player = serde_json::from_value(json!({
            "id": "4",
            "name": "Jose Altuve",
            "number": 27,
            "position": "2B",
            "teamId": "3",
            "dateOfBirth": "1990-05-06",
            "height": "5'6\"",
            "weight": 166,
            "bats": "R",
            "throws": "R"
        }))
        .unwrap();

        let day_before = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(player.age_on(day_before), Some(33));
        assert_eq!(player.age_on(birthday), Some(34));

        player.date_of_birth = "unknown".to_string();
        assert_eq!(player.age_on(birthday), None);
    }

    #[test]
    fn test_null_statistics_is_unrecorded() {
        let stats: Stats = serde_json::from_value(json!(null)).unwrap();
        assert!(stats.is_unrecorded());
    }

    #[test]
    fn test_partial_statistics_default_to_zero() {
        let stats: Stats = serde_json::from_value(json!({
            "atBats": 10,
            "hits": 3,
            "battingAverage": 0.3
        }))
        .unwrap();

        let counting = stats.recorded().unwrap();
        assert_eq!(counting.at_bats, 10);
        assert_eq!(counting.hits, 3);
        assert_eq!(counting.walks, 0);
        assert!(counting.pitching.is_none());
    }

    #[test]
    fn test_flat_pitching_fields_make_a_pitching_line() {
        let stats: Stats = serde_json::from_value(json!({
            "gamesPlayed": 32,
            "wins": 15,
            "losses": 4,
            "inningsPitched": 209.0,
            "hitsAllowed": 144,
            "runsAllowed": 58,
            "earnedRuns": 54,
            "walksAllowed": 40,
            "strikeoutsRecorded": 281,
            "era": 2.33,
            "whip": 0.88
        }))
        .unwrap();

        let counting = stats.recorded().unwrap();
        assert_eq!(counting.games_played, 32);
        assert_eq!(
            counting.pitching,
            Some(PitchingStats {
                wins: 15,
                losses: 4,
                saves: 0,
                innings_pitched: 209.0,
                hits_allowed: 144,
                runs_allowed: 58,
                earned_runs: 54,
                walks_allowed: 40,
                strikeouts_recorded: 281,
            })
        );
    }

    #[test]
    fn test_pitching_line_serializes_flat() {
        let stats = CountingStats {
            games_played: 70,
            pitching: Some(PitchingStats {
                saves: 41,
                innings_pitched: 66.1,
                earned_runs: 12,
                runs_allowed: 14,
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert!(value.get("pitching").is_none());
        assert_eq!(value["saves"], json!(41));
        assert_eq!(value["inningsPitched"], json!(66.1));
        assert_eq!(value["earnedRuns"], json!(12));

        let back: CountingStats = serde_json::from_value(value).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn test_hitter_serializes_without_pitching_fields() {
        let stats = CountingStats {
            at_bats: 10,
            hits: 3,
            ..Default::default()
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert!(value.get("wins").is_none());
        assert!(value.get("inningsPitched").is_none());
        assert_eq!(value["hits"], json!(3));
    }

    #[test]
    fn test_singles_never_underflow() {
        let stats = CountingStats {
            hits: 2,
            doubles: 1,
            home_runs: 3,
            ..Default::default()
        };
        assert_eq!(stats.singles(), 0);
    }

    #[test]
    fn test_validate_rejects_inconsistent_lines() {
        let too_many_hits = CountingStats {
            at_bats: 3,
            hits: 4,
            ..Default::default()
        };
        assert!(matches!(
            too_many_hits.validate(),
            Err(StatsError::InvalidInput { .. })
        ));

        let non_finite = CountingStats {
            pitching: Some(PitchingStats {
                innings_pitched: f64::NAN,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(non_finite.validate().is_err());

        let ok = CountingStats {
            at_bats: 10,
            hits: 3,
            doubles: 1,
            home_runs: 1,
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_draft_requires_name() {
        let draft = PlayerDraft {
            name: "   ".to_string(),
            number: 1,
            position: Position::C,
            team_id: TeamId::new("1"),
            date_of_birth: String::new(),
            height: String::new(),
            weight: 0,
            bats: BatSide::R,
            throws: ThrowSide::R,
        };
        match draft.validate() {
            Err(StatsError::MissingField { field }) => assert_eq!(field, "name"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }
}
