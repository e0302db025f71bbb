//! Domain records persisted by the app: players, teams and admin sessions.

pub mod admin;
pub mod player;
pub mod team;

pub use admin::{Admin, AdminCredentials, AdminSession};
pub use player::{CountingStats, PitchingStats, Player, PlayerDraft, Stats};
pub use team::{Division, League, Stadium, Surface, Team, TeamColors, TeamDraft, TeamStatistics};
