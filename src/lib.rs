//! Baseball Statistics Library
//!
//! Player and team records, a statistics engine for derived rate stats and
//! category leaderboards, local persistence, and a client for a remote
//! statistics API.
//!
//! ## Features
//!
//! - **Statistics Engine**: AVG, OBP, SLG, OPS, ERA and WHIP from counting stats
//! - **Leaderboards**: Rank players in any of 13 categories
//! - **Roster Management**: Create, edit and delete players and teams
//! - **Local Storage**: JSON collections in a SQLite key/value store
//! - **Remote Sync**: Pull teams and players from an HTTP API
//!
//! ## Quick Start
//!
//! ```rust
//! use baseball_stats::{
//!     leaders, roster::Roster, seed::MockSeed, storage::MemoryStore, StatCategory,
//! };
//!
//! # fn example() -> baseball_stats::Result<()> {
//! let mut roster = Roster::new(MemoryStore::new(), MockSeed);
//! let players = roster.players()?;
//!
//! for entry in leaders(&players, StatCategory::HomeRuns, 3) {
//!     println!("{}. {} ({})", entry.rank, entry.entity.name, entry.stat_value);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export BASEBALL_STATS_DB=~/baseball/store.db
//! export BASEBALL_STATS_API_URL=https://stats.example.org
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod roster;
pub mod search;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod util;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, SortDirection, StatCategory, TeamId};
pub use error::{Result, StatsError};
pub use models::{CountingStats, PitchingStats, Player, Stats, Team, TeamStatistics};
pub use stats::{leaders, rank_by_category, DerivedStats, RankedEntry, StatLine};

/// Overrides the default store location.
pub const DB_PATH_ENV_VAR: &str = "BASEBALL_STATS_DB";

/// Overrides the remote API base URL used by `sync`.
pub const API_URL_ENV_VAR: &str = "BASEBALL_STATS_API_URL";
