//! Baseball fielding positions and handedness.

use crate::error::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Baseball player positions.
///
/// Serialized with the scorebook abbreviations (`"P"`, `"1B"`, `"SS"`, ...).
///
/// # Examples
///
/// ```rust
/// use baseball_stats::Position;
///
/// let pos: Position = "ss".parse().unwrap();
/// assert_eq!(pos, Position::SS);
/// assert_eq!(Position::FirstBase.to_string(), "1B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    P,
    C,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    SS,
    LF,
    CF,
    RF,
    DH,
}

impl Position {
    pub const ALL: [Position; 10] = [
        Position::P,
        Position::C,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::SS,
        Position::LF,
        Position::CF,
        Position::RF,
        Position::DH,
    ];

    /// Full position name for detail views.
    pub fn description(&self) -> &'static str {
        match self {
            Position::P => "Pitcher",
            Position::C => "Catcher",
            Position::FirstBase => "First Base",
            Position::SecondBase => "Second Base",
            Position::ThirdBase => "Third Base",
            Position::SS => "Shortstop",
            Position::LF => "Left Field",
            Position::CF => "Center Field",
            Position::RF => "Right Field",
            Position::DH => "Designated Hitter",
        }
    }

    pub fn is_pitcher(&self) -> bool {
        matches!(self, Position::P)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::P => "P",
            Position::C => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::SS => "SS",
            Position::LF => "LF",
            Position::CF => "CF",
            Position::RF => "RF",
            Position::DH => "DH",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Position::ALL
            .into_iter()
            .find(|p| p.to_string() == upper)
            .ok_or(StatsError::InvalidPosition {
                position: s.to_string(),
            })
    }
}

/// Batting side: left, right or switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum BatSide {
    L,
    R,
    S,
}

impl fmt::Display for BatSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BatSide::L => "L",
            BatSide::R => "R",
            BatSide::S => "S",
        };
        write!(f, "{}", s)
    }
}

/// Throwing arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ThrowSide {
    L,
    R,
}

impl fmt::Display for ThrowSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThrowSide::L => "L",
            ThrowSide::R => "R",
        };
        write!(f, "{}", s)
    }
}
