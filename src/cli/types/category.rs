//! Leaderboard stat categories.

use crate::error::StatsError;
use std::fmt;
use std::str::FromStr;

/// Which way a leaderboard is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Higher values rank first (AVG, HR, ...).
    Descending,
    /// Lower values rank first (ERA, WHIP).
    Ascending,
}

/// Statistic a player collection can be ranked by.
///
/// Pitching categories are undefined for players without a pitching line,
/// so those players never appear on pitching leaderboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StatCategory {
    /// Batting average
    #[value(name = "avg")]
    BattingAverage,
    /// On-base percentage
    #[value(name = "obp")]
    OnBasePercentage,
    /// Slugging percentage
    #[value(name = "slg")]
    SluggingPercentage,
    /// On-base plus slugging
    #[value(name = "ops")]
    Ops,
    /// Home runs
    #[value(name = "hr")]
    HomeRuns,
    /// Runs batted in
    #[value(name = "rbi")]
    RunsBattedIn,
    /// Hits
    #[value(name = "h")]
    Hits,
    /// Stolen bases
    #[value(name = "sb")]
    StolenBases,
    /// Earned run average
    #[value(name = "era")]
    EarnedRunAverage,
    /// Walks plus hits per inning pitched
    #[value(name = "whip")]
    Whip,
    /// Pitching wins
    #[value(name = "w")]
    Wins,
    /// Pitching strikeouts
    #[value(name = "so")]
    Strikeouts,
    /// Saves
    #[value(name = "sv")]
    Saves,
}

impl StatCategory {
    pub const ALL: [StatCategory; 13] = [
        StatCategory::BattingAverage,
        StatCategory::OnBasePercentage,
        StatCategory::SluggingPercentage,
        StatCategory::Ops,
        StatCategory::HomeRuns,
        StatCategory::RunsBattedIn,
        StatCategory::Hits,
        StatCategory::StolenBases,
        StatCategory::EarnedRunAverage,
        StatCategory::Whip,
        StatCategory::Wins,
        StatCategory::Strikeouts,
        StatCategory::Saves,
    ];

    pub fn direction(&self) -> SortDirection {
        match self {
            StatCategory::EarnedRunAverage | StatCategory::Whip => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn is_pitching(&self) -> bool {
        matches!(
            self,
            StatCategory::EarnedRunAverage
                | StatCategory::Whip
                | StatCategory::Wins
                | StatCategory::Strikeouts
                | StatCategory::Saves
        )
    }

    /// Decimal places used when displaying values of this category.
    pub fn precision(&self) -> usize {
        match self {
            StatCategory::BattingAverage
            | StatCategory::OnBasePercentage
            | StatCategory::SluggingPercentage
            | StatCategory::Ops => 3,
            StatCategory::EarnedRunAverage | StatCategory::Whip => 2,
            _ => 0,
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatCategory::BattingAverage => "AVG",
            StatCategory::OnBasePercentage => "OBP",
            StatCategory::SluggingPercentage => "SLG",
            StatCategory::Ops => "OPS",
            StatCategory::HomeRuns => "HR",
            StatCategory::RunsBattedIn => "RBI",
            StatCategory::Hits => "H",
            StatCategory::StolenBases => "SB",
            StatCategory::EarnedRunAverage => "ERA",
            StatCategory::Whip => "WHIP",
            StatCategory::Wins => "W",
            StatCategory::Strikeouts => "SO",
            StatCategory::Saves => "SV",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatCategory {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        StatCategory::ALL
            .into_iter()
            .find(|c| c.to_string() == upper)
            .ok_or(StatsError::InvalidCategory {
                category: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_era_and_whip_sort_ascending() {
        for category in StatCategory::ALL {
            let expected = match category {
                StatCategory::EarnedRunAverage | StatCategory::Whip => SortDirection::Ascending,
                _ => SortDirection::Descending,
            };
            assert_eq!(category.direction(), expected, "{}", category);
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("avg".parse::<StatCategory>().unwrap(), StatCategory::BattingAverage);
        assert_eq!("ERA".parse::<StatCategory>().unwrap(), StatCategory::EarnedRunAverage);
        assert!(matches!(
            "xyz".parse::<StatCategory>(),
            Err(StatsError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_pitching_categories() {
        assert!(StatCategory::Saves.is_pitching());
        assert!(!StatCategory::Ops.is_pitching());
        assert_eq!(StatCategory::Ops.precision(), 3);
        assert_eq!(StatCategory::Whip.precision(), 2);
        assert_eq!(StatCategory::HomeRuns.precision(), 0);
    }
}
