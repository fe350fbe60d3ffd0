use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    DB,
    K,
    P,
}

pub const ALL_POSITIONS: [Position; 10] = [
    Position::QB,
    Position::RB,
    Position::WR,
    Position::TE,
    Position::OL,
    Position::DL,
    Position::LB,
    Position::DB,
    Position::K,
    Position::P,
];

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::OL => "OL",
            Position::DL => "DL",
            Position::LB => "LB",
            Position::DB => "DB",
            Position::K => "K",
            Position::P => "P",
        }
    }

    /// Positions that accumulate tackles.
    pub fn is_defensive(&self) -> bool {
        matches!(self, Position::DL | Position::LB | Position::DB)
    }

    pub fn records_sacks(&self) -> bool {
        matches!(self, Position::DL | Position::LB)
    }

    pub fn records_interceptions(&self) -> bool {
        matches!(self, Position::DB | Position::LB)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ALL_POSITIONS
            .iter()
            .copied()
            .find(|p| p.as_str() == upper)
            .ok_or_else(|| format!("unknown position code '{s}'"))
    }
}

/// One player's statistics for one season with one team.
///
/// Counting stats are unsigned so non-negativity holds by construction.
/// (name, team, season) is a practical near-key but duplicates are not
/// rejected; the dataset carries no surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonRecord {
    #[serde(rename = "Player Name")]
    pub player_name: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Position")]
    pub position: Position,
    #[serde(rename = "Season")]
    pub season: u16,
    #[serde(rename = "Games Played")]
    pub games_played: u32,
    #[serde(rename = "Passing Yards")]
    pub passing_yards: u32,
    #[serde(rename = "Rushing Yards")]
    pub rushing_yards: u32,
    #[serde(rename = "Receiving Yards")]
    pub receiving_yards: u32,
    #[serde(rename = "Touchdowns")]
    pub touchdowns: u32,
    #[serde(rename = "Tackles")]
    pub tackles: u32,
    #[serde(rename = "Sacks")]
    pub sacks: u32,
    #[serde(rename = "Interceptions")]
    pub interceptions: u32,
}

impl PlayerSeasonRecord {
    pub fn total_yards(&self) -> u32 {
        self.passing_yards + self.rushing_yards + self.receiving_yards
    }

    /// Yardage from rushing and receiving only.
    pub fn offensive_yards(&self) -> u32 {
        self.rushing_yards + self.receiving_yards
    }

    /// `None` when no games were played; a per-game rate over zero games is
    /// undefined rather than zero, and callers ranking by a per-game metric
    /// must leave undefined records out of the order.
    pub fn yards_per_game(&self) -> Option<f64> {
        self.per_game(self.total_yards())
    }

    pub fn touchdowns_per_game(&self) -> Option<f64> {
        self.per_game(self.touchdowns)
    }

    pub fn tackles_per_game(&self) -> Option<f64> {
        self.per_game(self.tackles)
    }

    pub fn sacks_per_game(&self) -> Option<f64> {
        self.per_game(self.sacks)
    }

    fn per_game(&self, total: u32) -> Option<f64> {
        if self.games_played == 0 {
            None
        } else {
            Some(f64::from(total) / f64::from(self.games_played))
        }
    }
}
