//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{BatSide, PlayerId, Position, StatCategory, TeamId, ThrowSide};

use crate::models::{Division, League, Surface};

#[derive(Debug, Parser)]
#[clap(name = "baseball-stats", about = "Baseball player and team statistics", version)]
pub struct BaseballStats {
    /// Store location (or set `BASEBALL_STATS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log debug output to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List players, optionally filtered by a search query or team.
    Players {
        /// Case-insensitive match on name, position or team name.
        #[clap(long, short)]
        query: Option<String>,

        /// Only players on this team.
        #[clap(long, short)]
        team: Option<TeamId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one player with derived statistics.
    Player {
        id: PlayerId,

        #[clap(long)]
        json: bool,
    },

    /// List teams, optionally filtered by name or abbreviation.
    Teams {
        #[clap(long, short)]
        query: Option<String>,

        #[clap(long)]
        json: bool,
    },

    /// Rank players in a statistical category.
    ///
    /// ERA and WHIP rank lowest first; every other category highest first.
    Leaders {
        #[clap(value_enum)]
        category: StatCategory,

        /// Number of leaders to show.
        #[clap(long, short, default_value_t = 10)]
        limit: usize,

        #[clap(long)]
        json: bool,
    },

    /// Administer players, teams and statistics (requires login).
    Admin {
        #[clap(subcommand)]
        cmd: AdminCmd,
    },

    /// Download teams and players from the remote API into the store.
    Sync {
        /// API base URL (or set `BASEBALL_STATS_API_URL` env var).
        #[clap(long)]
        api_url: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCmd {
    /// Start a 24 hour admin session.
    Login {
        #[clap(long, short)]
        username: String,

        #[clap(long, short)]
        password: String,
    },

    Logout,

    /// Show the current session, if any.
    Status,

    Player {
        #[clap(subcommand)]
        cmd: AdminPlayerCmd,
    },

    Team {
        #[clap(subcommand)]
        cmd: AdminTeamCmd,
    },

    /// Record season statistics.
    Stats {
        #[clap(subcommand)]
        cmd: AdminStatsCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminPlayerCmd {
    /// Add a player; `--name` and `--team` are required.
    Add {
        #[clap(flatten)]
        fields: PlayerFields,
    },

    /// Edit a player; omitted fields keep their current value.
    Edit {
        id: PlayerId,

        #[clap(flatten)]
        fields: PlayerFields,
    },

    Delete { id: PlayerId },
}

#[derive(Debug, Subcommand)]
pub enum AdminTeamCmd {
    /// Add a team; `--name` and `--abbreviation` are required.
    Add {
        #[clap(flatten)]
        fields: TeamFields,
    },

    /// Edit a team; omitted fields keep their current value.
    Edit {
        id: TeamId,

        #[clap(flatten)]
        fields: TeamFields,
    },

    /// Delete a team. Its players are kept.
    Delete { id: TeamId },
}

#[derive(Debug, Subcommand)]
pub enum AdminStatsCmd {
    /// Set a player's counting stats; omitted counts keep their current value.
    Player {
        id: PlayerId,

        #[clap(flatten)]
        batting: BattingFields,

        #[clap(flatten)]
        pitching: PitchingFields,

        /// Remove the player's statistics entirely.
        #[clap(long, conflicts_with_all = ["games", "at_bats", "hits", "wins", "innings_pitched"])]
        clear: bool,
    },

    /// Set a team's record; win percentage and run differential are derived.
    Team {
        id: TeamId,

        #[clap(long)]
        wins: u32,

        #[clap(long)]
        losses: u32,

        #[clap(long)]
        runs_scored: u32,

        #[clap(long)]
        runs_allowed: u32,
    },
}

#[derive(Debug, Default, Args)]
pub struct PlayerFields {
    #[clap(long)]
    pub name: Option<String>,

    /// Jersey number.
    #[clap(long)]
    pub number: Option<u8>,

    /// P, C, 1B, 2B, 3B, SS, LF, CF, RF or DH.
    #[clap(long)]
    pub position: Option<Position>,

    #[clap(long)]
    pub team: Option<TeamId>,

    /// YYYY-MM-DD
    #[clap(long)]
    pub dob: Option<String>,

    /// e.g. 6'2"
    #[clap(long)]
    pub height: Option<String>,

    /// Pounds.
    #[clap(long)]
    pub weight: Option<u16>,

    #[clap(long, value_enum)]
    pub bats: Option<BatSide>,

    #[clap(long, value_enum)]
    pub throws: Option<ThrowSide>,
}

#[derive(Debug, Default, Args)]
pub struct TeamFields {
    #[clap(long)]
    pub name: Option<String>,

    /// Stored upper-case.
    #[clap(long)]
    pub abbreviation: Option<String>,

    #[clap(long)]
    pub city: Option<String>,

    #[clap(long)]
    pub state: Option<String>,

    #[clap(long, value_enum)]
    pub league: Option<League>,

    #[clap(long, value_enum)]
    pub division: Option<Division>,

    #[clap(long)]
    pub founded: Option<u16>,

    /// Stadium name.
    #[clap(long)]
    pub stadium: Option<String>,

    #[clap(long)]
    pub capacity: Option<u32>,

    #[clap(long, value_enum)]
    pub surface: Option<Surface>,

    #[clap(long)]
    pub year_opened: Option<u16>,

    /// Hex color, e.g. #003087.
    #[clap(long)]
    pub primary_color: Option<String>,

    #[clap(long)]
    pub secondary_color: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct BattingFields {
    #[clap(long)]
    pub games: Option<u32>,
    #[clap(long)]
    pub at_bats: Option<u32>,
    #[clap(long)]
    pub runs: Option<u32>,
    #[clap(long)]
    pub hits: Option<u32>,
    #[clap(long)]
    pub doubles: Option<u32>,
    #[clap(long)]
    pub triples: Option<u32>,
    #[clap(long)]
    pub home_runs: Option<u32>,
    #[clap(long)]
    pub rbi: Option<u32>,
    #[clap(long)]
    pub walks: Option<u32>,
    #[clap(long)]
    pub strikeouts: Option<u32>,
    #[clap(long)]
    pub stolen_bases: Option<u32>,
    #[clap(long)]
    pub caught_stealing: Option<u32>,
    #[clap(long)]
    pub hit_by_pitch: Option<u32>,
    #[clap(long)]
    pub sacrifice_flies: Option<u32>,
}

/// Any of these flags adds a pitching line to the player's stats.
#[derive(Debug, Default, Args)]
pub struct PitchingFields {
    #[clap(long)]
    pub wins: Option<u32>,
    #[clap(long)]
    pub losses: Option<u32>,
    #[clap(long)]
    pub saves: Option<u32>,
    /// Plain decimal, e.g. 132.1
    #[clap(long)]
    pub innings_pitched: Option<f64>,
    #[clap(long)]
    pub hits_allowed: Option<u32>,
    #[clap(long)]
    pub runs_allowed: Option<u32>,
    #[clap(long)]
    pub earned_runs: Option<u32>,
    #[clap(long)]
    pub walks_allowed: Option<u32>,
    /// Strikeouts recorded as a pitcher.
    #[clap(long)]
    pub pitching_strikeouts: Option<u32>,
}
