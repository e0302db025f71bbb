//! Team records and team-level season statistics.

use crate::cli::types::TeamId;
use crate::error::{Result, StatsError};
use crate::stats::compute::{run_differential, win_percentage};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub city: String,
    pub state: String,
    pub league: League,
    pub division: Division,
    pub founded: u16,
    pub stadium: Stadium,
    pub colors: TeamColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<TeamStatistics>,
}

/// American or National League.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum League {
    #[default]
    AL,
    NL,
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            League::AL => "AL",
            League::NL => "NL",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Division {
    #[default]
    East,
    Central,
    West,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Division::East => "East",
            Division::Central => "Central",
            Division::West => "West",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stadium {
    pub name: String,
    pub capacity: u32,
    pub surface: Surface,
    pub year_opened: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Surface {
    #[default]
    Grass,
    Turf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamColors {
    pub primary: String,
    pub secondary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Default for TeamColors {
    fn default() -> Self {
        Self {
            primary: "#000000".to_string(),
            secondary: "#FFFFFF".to_string(),
            accent: None,
        }
    }
}

/// Season totals for a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStatistics {
    pub season: u16,
    pub wins: u32,
    pub losses: u32,
    pub win_percentage: f64,
    pub games_back: f64,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    pub run_differential: i64,

    pub team_batting_average: f64,
    pub team_on_base_percentage: f64,
    pub team_slugging_percentage: f64,
    pub team_home_runs: u32,
    pub team_stolen_bases: u32,

    #[serde(rename = "teamERA")]
    pub team_era: f64,
    #[serde(rename = "teamWHIP")]
    pub team_whip: f64,
    pub team_strikeouts: u32,
    pub team_saves: u32,

    pub fielding_percentage: f64,
    pub errors: u32,
    pub double_plays: u32,
}

impl TeamStatistics {
    /// Build a season line from a won-lost record and run totals, deriving
    /// win percentage and run differential.
    pub fn from_record(season: u16, wins: u32, losses: u32, runs_scored: u32, runs_allowed: u32) -> Self {
        Self {
            season,
            wins,
            losses,
            win_percentage: win_percentage(wins, losses),
            runs_scored,
            runs_allowed,
            run_differential: run_differential(runs_scored, runs_allowed),
            ..Default::default()
        }
    }
}

/// Fields an admin supplies when creating or editing a team.
///
/// Only name and abbreviation are required; everything else falls back to
/// placeholder values on create and is left untouched on edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDraft {
    pub name: String,
    pub abbreviation: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub league: Option<League>,
    pub division: Option<Division>,
    pub founded: Option<u16>,
    pub stadium: Option<Stadium>,
    pub colors: Option<TeamColors>,
    pub logo_url: Option<String>,
}

impl TeamDraft {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("name", &self.name), ("abbreviation", &self.abbreviation)] {
            if value.trim().is_empty() {
                return Err(StatsError::MissingField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Create a new team; `current_year` fills `founded` and the stadium's
    /// opening year when they are not given.
    pub fn into_team(self, id: TeamId, current_year: u16) -> Team {
        Team {
            id,
            name: self.name.trim().to_string(),
            abbreviation: self.abbreviation.trim().to_uppercase(),
            city: self.city.unwrap_or_else(|| "Unknown".to_string()),
            state: self.state.unwrap_or_else(|| "Unknown".to_string()),
            league: self.league.unwrap_or_default(),
            division: self.division.unwrap_or_default(),
            founded: self.founded.unwrap_or(current_year),
            stadium: self.stadium.unwrap_or_else(|| Stadium {
                name: "Stadium".to_string(),
                capacity: 0,
                surface: Surface::Grass,
                year_opened: current_year,
            }),
            colors: self.colors.unwrap_or_default(),
            logo_url: self.logo_url,
            statistics: None,
        }
    }

    /// Apply the draft on top of an existing team.
    pub fn apply_to(self, team: &mut Team) {
        team.name = self.name.trim().to_string();
        team.abbreviation = self.abbreviation.trim().to_uppercase();
        if let Some(city) = self.city {
            team.city = city;
        }
        if let Some(state) = self.state {
            team.state = state;
        }
        if let Some(league) = self.league {
            team.league = league;
        }
        if let Some(division) = self.division {
            team.division = division;
        }
        if let Some(founded) = self.founded {
            team.founded = founded;
        }
        if let Some(stadium) = self.stadium {
            team.stadium = stadium;
        }
        if let Some(colors) = self.colors {
            team.colors = colors;
        }
        if self.logo_url.is_some() {
            team.logo_url = self.logo_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team_defaults() {
        let team = TeamDraft::new(" Portland Pioneers ", "pdx").into_team(TeamId::new("team_1"), 2024);

        assert_eq!(team.name, "Portland Pioneers");
        assert_eq!(team.abbreviation, "PDX");
        assert_eq!(team.city, "Unknown");
        assert_eq!(team.league, League::AL);
        assert_eq!(team.division, Division::East);
        assert_eq!(team.founded, 2024);
        assert_eq!(team.stadium.year_opened, 2024);
        assert_eq!(team.colors.secondary, "#FFFFFF");
        assert!(team.statistics.is_none());
    }

    #[test]
    fn test_apply_draft_keeps_unset_fields() {
        let mut team = TeamDraft {
            city: Some("Portland".to_string()),
            ..TeamDraft::new("Pioneers", "PDX")
        }
        .into_team(TeamId::new("team_1"), 2024);

        TeamDraft::new("Portland Pioneers", "ppi").apply_to(&mut team);

        assert_eq!(team.name, "Portland Pioneers");
        assert_eq!(team.abbreviation, "PPI");
        assert_eq!(team.city, "Portland");
    }

    #[test]
    fn test_draft_requires_abbreviation() {
        match TeamDraft::new("Pioneers", " ").validate() {
            Err(StatsError::MissingField { field }) => assert_eq!(field, "abbreviation"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_statistics_from_record() {
        let stats = TeamStatistics::from_record(2024, 90, 72, 780, 700);
        assert_eq!(stats.win_percentage, 0.556);
        assert_eq!(stats.run_differential, 80);
        assert_eq!(stats.team_era, 0.0);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["teamERA"], 0.0);
        assert_eq!(json["winPercentage"], 0.556);
    }
}
