//! Leaderboards: rank a collection of entities by one statistic.

use serde::Serialize;

use crate::cli::types::{SortDirection, StatCategory};
use crate::models::{CountingStats, Player, Stats};

use super::compute::{
    batting_average, earned_run_average, on_base_percentage, on_base_plus_slugging,
    slugging_percentage, whip,
};

/// Anything that can carry a season statistics line.
pub trait StatLine {
    fn stats(&self) -> &Stats;
}

impl StatLine for Player {
    fn stats(&self) -> &Stats {
        &self.statistics
    }
}

impl StatLine for Stats {
    fn stats(&self) -> &Stats {
        self
    }
}

/// One leaderboard row.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry<'a, E> {
    pub entity: &'a E,
    pub stat_value: f64,
    /// 1-based position on the leaderboard
    pub rank: usize,
}

impl<E> Clone for RankedEntry<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RankedEntry<'_, E> {}

/// Value of `category` for one statistics line, or `None` when the category
/// does not apply (pitching categories for non-pitchers).
pub fn category_value(stats: &CountingStats, category: StatCategory) -> Option<f64> {
    let pitching = stats.pitching.as_ref();
    let value = match category {
        StatCategory::BattingAverage => batting_average(stats.hits, stats.at_bats),
        StatCategory::OnBasePercentage => on_base_percentage(
            stats.hits,
            stats.walks,
            stats.hit_by_pitch,
            stats.at_bats,
            stats.sacrifice_flies,
        ),
        StatCategory::SluggingPercentage => slugging_percentage(
            stats.singles(),
            stats.doubles,
            stats.triples,
            stats.home_runs,
            stats.at_bats,
        ),
        StatCategory::Ops => {
            let obp = category_value(stats, StatCategory::OnBasePercentage)?;
            let slg = category_value(stats, StatCategory::SluggingPercentage)?;
            on_base_plus_slugging(obp, slg)
        }
        StatCategory::HomeRuns => f64::from(stats.home_runs),
        StatCategory::RunsBattedIn => f64::from(stats.rbi),
        StatCategory::Hits => f64::from(stats.hits),
        StatCategory::StolenBases => f64::from(stats.stolen_bases),
        StatCategory::EarnedRunAverage => {
            let p = pitching?;
            earned_run_average(p.earned_runs, p.innings_pitched)
        }
        StatCategory::Whip => {
            let p = pitching?;
            whip(p.walks_allowed, p.hits_allowed, p.innings_pitched)
        }
        StatCategory::Wins => f64::from(pitching?.wins),
        StatCategory::Strikeouts => f64::from(pitching?.strikeouts_recorded),
        StatCategory::Saves => f64::from(pitching?.saves),
    };
    Some(value)
}

/// Rank `entities` by `category`.
///
/// Entities without recorded statistics, without a defined value, or with a
/// value that is not strictly positive are left off the board. The sort is
/// stable, so equal values keep their input order, and ties get consecutive
/// ranks rather than a shared one. The input slice is not modified.
pub fn rank_by_category<E: StatLine>(entities: &[E], category: StatCategory) -> Vec<RankedEntry<'_, E>> {
    let mut scored: Vec<(&E, f64)> = entities
        .iter()
        .filter_map(|entity| {
            let counting = entity.stats().recorded()?;
            let value = category_value(counting, category)?;
            (value.is_finite() && value > 0.0).then_some((entity, value))
        })
        .collect();

    match category.direction() {
        SortDirection::Descending => scored.sort_by(|a, b| b.1.total_cmp(&a.1)),
        SortDirection::Ascending => scored.sort_by(|a, b| a.1.total_cmp(&b.1)),
    }

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (entity, stat_value))| RankedEntry {
            entity,
            stat_value,
            rank: i + 1,
        })
        .collect()
}

/// The top `limit` entries of [`rank_by_category`].
pub fn leaders<E: StatLine>(
    entities: &[E],
    category: StatCategory,
    limit: usize,
) -> Vec<RankedEntry<'_, E>> {
    let mut ranked = rank_by_category(entities, category);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests;
