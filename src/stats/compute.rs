//! Rate statistics derived from counting stats.
//!
//! Every function here is total: a zero denominator yields `0.0` instead of
//! an error or a NaN. Inputs are not validated; use
//! [`DerivedStats::try_from_counting`] when the counts come from user input.

use serde::Serialize;

use crate::error::Result;
use crate::models::CountingStats;

/// Decimal places for hitting rates (AVG, OBP, SLG) and win percentage.
pub const RATE_PRECISION: i32 = 3;
/// Decimal places for per-inning pitching rates (ERA, WHIP).
pub const PITCHING_PRECISION: i32 = 2;
/// Runs a replacement-level player is assumed to produce.
pub const DEFAULT_REPLACEMENT_RUNS: f64 = 20.0;

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Hits / at bats.
pub fn batting_average(hits: u32, at_bats: u32) -> f64 {
    if at_bats == 0 {
        return 0.0;
    }
    round_to(f64::from(hits) / f64::from(at_bats), RATE_PRECISION)
}

/// (H + BB + HBP) / (AB + BB + HBP + SF).
pub fn on_base_percentage(
    hits: u32,
    walks: u32,
    hit_by_pitch: u32,
    at_bats: u32,
    sacrifice_flies: u32,
) -> f64 {
    let denominator =
        u64::from(at_bats) + u64::from(walks) + u64::from(hit_by_pitch) + u64::from(sacrifice_flies);
    if denominator == 0 {
        return 0.0;
    }
    let times_on_base = u64::from(hits) + u64::from(walks) + u64::from(hit_by_pitch);
    round_to(times_on_base as f64 / denominator as f64, RATE_PRECISION)
}

/// Total bases / at bats. `singles` is supplied by the caller, it is not
/// derived from hits here.
pub fn slugging_percentage(
    singles: u32,
    doubles: u32,
    triples: u32,
    home_runs: u32,
    at_bats: u32,
) -> f64 {
    if at_bats == 0 {
        return 0.0;
    }
    let total_bases = u64::from(singles)
        + 2 * u64::from(doubles)
        + 3 * u64::from(triples)
        + 4 * u64::from(home_runs);
    round_to(total_bases as f64 / f64::from(at_bats), RATE_PRECISION)
}

/// OBP + SLG. No rounding beyond what the inputs already carry.
pub fn on_base_plus_slugging(obp: f64, slg: f64) -> f64 {
    obp + slg
}

/// Earned runs per nine innings.
pub fn earned_run_average(earned_runs: u32, innings_pitched: f64) -> f64 {
    if innings_pitched == 0.0 {
        return 0.0;
    }
    round_to(f64::from(earned_runs) * 9.0 / innings_pitched, PITCHING_PRECISION)
}

/// (Walks + hits allowed) / innings pitched.
pub fn whip(walks_allowed: u32, hits_allowed: u32, innings_pitched: f64) -> f64 {
    if innings_pitched == 0.0 {
        return 0.0;
    }
    let baserunners = u64::from(walks_allowed) + u64::from(hits_allowed);
    round_to(baserunners as f64 / innings_pitched, PITCHING_PRECISION)
}

/// Wins / decisions.
pub fn win_percentage(wins: u32, losses: u32) -> f64 {
    let games = u64::from(wins) + u64::from(losses);
    if games == 0 {
        return 0.0;
    }
    round_to(f64::from(wins) / games as f64, RATE_PRECISION)
}

pub fn run_differential(runs_scored: u32, runs_allowed: u32) -> i64 {
    i64::from(runs_scored) - i64::from(runs_allowed)
}

/// Simplified wins above replacement: run value above replacement divided
/// by ten runs per win, rounded to one decimal. Real WAR is far more
/// involved; this is a rough player-value indicator.
pub fn simplified_war(
    batting_runs: f64,
    baserunning_runs: f64,
    fielding_runs: f64,
    positional_adjustment: f64,
    replacement_runs: f64,
) -> f64 {
    let total_runs = batting_runs + baserunning_runs + fielding_runs + positional_adjustment;
    round_to((total_runs - replacement_runs) / 10.0, 1)
}

/// All rate statistics for one player-season.
///
/// `era` and `whip` are `None` for players without a pitching line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub batting_average: f64,
    pub on_base_percentage: f64,
    pub slugging_percentage: f64,
    pub ops: f64,
    pub era: Option<f64>,
    pub whip: Option<f64>,
}

impl DerivedStats {
    pub fn from_counting(stats: &CountingStats) -> Self {
        let obp = on_base_percentage(
            stats.hits,
            stats.walks,
            stats.hit_by_pitch,
            stats.at_bats,
            stats.sacrifice_flies,
        );
        let slg = slugging_percentage(
            stats.singles(),
            stats.doubles,
            stats.triples,
            stats.home_runs,
            stats.at_bats,
        );

        Self {
            batting_average: batting_average(stats.hits, stats.at_bats),
            on_base_percentage: obp,
            slugging_percentage: slg,
            ops: on_base_plus_slugging(obp, slg),
            era: stats
                .pitching
                .as_ref()
                .map(|p| earned_run_average(p.earned_runs, p.innings_pitched)),
            whip: stats
                .pitching
                .as_ref()
                .map(|p| whip(p.walks_allowed, p.hits_allowed, p.innings_pitched)),
        }
    }

    /// Like [`DerivedStats::from_counting`], but rejects inconsistent counts
    /// with [`crate::StatsError::InvalidInput`].
    pub fn try_from_counting(stats: &CountingStats) -> Result<Self> {
        stats.validate()?;
        Ok(Self::from_counting(stats))
    }
}
