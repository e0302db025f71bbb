//! Unit tests for leaderboard ranking

use super::*;
use crate::models::PitchingStats;

fn hitter(hits: u32, at_bats: u32) -> Stats {
    Stats::Recorded(CountingStats {
        at_bats,
        hits,
        ..Default::default()
    })
}

fn pitcher(earned_runs: u32, innings_pitched: f64) -> Stats {
    Stats::Recorded(CountingStats {
        pitching: Some(PitchingStats {
            innings_pitched,
            earned_runs,
            runs_allowed: earned_runs,
            ..Default::default()
        }),
        ..Default::default()
    })
}

fn values<E>(ranked: &[RankedEntry<'_, E>]) -> Vec<f64> {
    ranked.iter().map(|e| e.stat_value).collect()
}

fn ranks<E>(ranked: &[RankedEntry<'_, E>]) -> Vec<usize> {
    ranked.iter().map(|e| e.rank).collect()
}

#[cfg(test)]
mod rank_by_category_tests {
    use super::*;

    #[test]
    fn test_batting_average_ranks_descending() {
        let lines = vec![hitter(30, 100), hitter(25, 100), hitter(28, 100)];

        let ranked = rank_by_category(&lines, StatCategory::BattingAverage);

        assert_eq!(values(&ranked), vec![0.300, 0.280, 0.250]);
        assert_eq!(ranks(&ranked), vec![1, 2, 3]);
        assert!(std::ptr::eq(ranked[0].entity, &lines[0]));
        assert!(std::ptr::eq(ranked[1].entity, &lines[2]));
    }

    #[test]
    fn test_era_ranks_ascending() {
        let lines = vec![pitcher(5, 10.0), pitcher(7, 30.0), pitcher(3, 9.0)];

        let ranked = rank_by_category(&lines, StatCategory::EarnedRunAverage);

        assert_eq!(values(&ranked), vec![2.10, 3.00, 4.50]);
        assert_eq!(ranks(&ranked), vec![1, 2, 3]);
    }

    #[test]
    fn test_unrecorded_and_zero_values_are_omitted() {
        let lines = vec![
            hitter(30, 100),
            Stats::Unrecorded,
            hitter(0, 50),
            hitter(0, 0),
            hitter(20, 100),
        ];

        let ranked = rank_by_category(&lines, StatCategory::BattingAverage);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.len() < lines.len());
        assert_eq!(values(&ranked), vec![0.300, 0.200]);
    }

    #[test]
    fn test_non_pitchers_excluded_from_pitching_boards() {
        let lines = vec![hitter(30, 100), pitcher(3, 9.0), hitter(40, 100)];

        let era = rank_by_category(&lines, StatCategory::EarnedRunAverage);
        assert_eq!(era.len(), 1);
        assert!(std::ptr::eq(era[0].entity, &lines[1]));

        let whip = rank_by_category(&lines, StatCategory::Whip);
        assert!(whip.is_empty(), "pitcher with no baserunners has WHIP 0");
    }

    #[test]
    fn test_pitcher_without_innings_is_omitted() {
        let lines = vec![pitcher(2, 0.0), pitcher(2, 6.0)];
        let ranked = rank_by_category(&lines, StatCategory::EarnedRunAverage);
        assert_eq!(values(&ranked), vec![3.0]);
    }

    #[test]
    fn test_ties_keep_input_order_and_distinct_ranks() {
        let lines = vec![hitter(25, 100), hitter(30, 100), hitter(50, 200), hitter(75, 300)];

        let ranked = rank_by_category(&lines, StatCategory::BattingAverage);

        assert_eq!(ranks(&ranked), vec![1, 2, 3, 4]);
        assert!(std::ptr::eq(ranked[0].entity, &lines[1]));
        assert!(std::ptr::eq(ranked[1].entity, &lines[0]));
        assert!(std::ptr::eq(ranked[2].entity, &lines[2]));
        assert!(std::ptr::eq(ranked[3].entity, &lines[3]));
    }

    #[test]
    fn test_ranks_are_contiguous() {
        let lines: Vec<Stats> = (0..40u32).map(|h| hitter(h % 13, 40)).collect();

        let ranked = rank_by_category(&lines, StatCategory::BattingAverage);
        let expected: Vec<usize> = (1..=ranked.len()).collect();

        assert_eq!(ranks(&ranked), expected);
        assert!(ranked.windows(2).all(|w| w[0].stat_value >= w[1].stat_value));
    }

    #[test]
    fn test_ranking_is_idempotent_and_pure() {
        let lines = vec![hitter(30, 100), pitcher(3, 9.0), hitter(28, 100)];
        let before = lines.clone();

        let first = rank_by_category(&lines, StatCategory::BattingAverage);
        let second = rank_by_category(&lines, StatCategory::BattingAverage);

        assert_eq!(first, second);
        assert_eq!(lines, before);
    }

    #[test]
    fn test_empty_input() {
        let lines: Vec<Stats> = Vec::new();
        assert!(rank_by_category(&lines, StatCategory::Ops).is_empty());
    }

    #[test]
    fn test_counting_categories() {
        let mut slugger = CountingStats {
            at_bats: 500,
            hits: 150,
            home_runs: 40,
            rbi: 110,
            ..Default::default()
        };
        let lines = vec![
            Stats::Recorded(slugger.clone()),
            {
                slugger.home_runs = 12;
                Stats::Recorded(slugger.clone())
            },
        ];

        let ranked = rank_by_category(&lines, StatCategory::HomeRuns);
        assert_eq!(values(&ranked), vec![40.0, 12.0]);

        assert!(rank_by_category(&lines, StatCategory::StolenBases).is_empty());
    }

    #[test]
    fn test_leaders_truncates() {
        let lines = vec![hitter(30, 100), hitter(25, 100), hitter(28, 100)];
        let top = leaders(&lines, StatCategory::BattingAverage, 2);
        assert_eq!(values(&top), vec![0.300, 0.280]);

        assert_eq!(leaders(&lines, StatCategory::BattingAverage, 10).len(), 3);
    }
}

#[cfg(test)]
mod category_value_tests {
    use super::*;

    #[test]
    fn test_ops_matches_component_sum() {
        let stats = CountingStats {
            at_bats: 10,
            hits: 3,
            doubles: 1,
            walks: 1,
            ..Default::default()
        };
        let obp = category_value(&stats, StatCategory::OnBasePercentage).unwrap();
        let slg = category_value(&stats, StatCategory::SluggingPercentage).unwrap();

        assert_eq!(obp, 0.364);
        assert_eq!(slg, 0.4);
        assert_eq!(category_value(&stats, StatCategory::Ops), Some(obp + slg));
    }

    #[test]
    fn test_pitching_categories_undefined_without_pitching_line() {
        let stats = CountingStats::default();
        for category in StatCategory::ALL {
            let value = category_value(&stats, category);
            assert_eq!(value.is_none(), category.is_pitching(), "{}", category);
        }
    }
}
