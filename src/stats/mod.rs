//! Statistics engine: rate statistics and leaderboards.
//!
//! Pure, synchronous functions with no I/O. Callers load player collections
//! from wherever they live and hand them in.
//! - `compute`: AVG/OBP/SLG/OPS/ERA/WHIP and team-level rates
//! - `ranking`: per-category leaderboards

pub mod compute;
pub mod ranking;

pub use compute::{
    batting_average, earned_run_average, on_base_percentage, on_base_plus_slugging,
    run_differential, simplified_war, slugging_percentage, whip, win_percentage, DerivedStats,
};
pub use ranking::{category_value, leaders, rank_by_category, RankedEntry, StatLine};
