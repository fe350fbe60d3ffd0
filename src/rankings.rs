use std::fmt;

use crate::roster::PlayerSeasonRecord;

/// A stat a leaderboard can rank by: stored counting stats, derived
/// yardage totals, or per-game rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKey {
    PassingYards,
    RushingYards,
    ReceivingYards,
    TotalYards,
    OffensiveYards,
    Touchdowns,
    Tackles,
    Sacks,
    Interceptions,
    YardsPerGame,
    TouchdownsPerGame,
    TacklesPerGame,
    SacksPerGame,
}

/// The counting-stat leaderboards the dashboard tabs over.
pub const LEADERBOARD_KEYS: [StatKey; 6] = [
    StatKey::PassingYards,
    StatKey::RushingYards,
    StatKey::ReceivingYards,
    StatKey::Touchdowns,
    StatKey::Tackles,
    StatKey::Sacks,
];

impl StatKey {
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::PassingYards => "Passing Yards",
            StatKey::RushingYards => "Rushing Yards",
            StatKey::ReceivingYards => "Receiving Yards",
            StatKey::TotalYards => "Total Yards",
            StatKey::OffensiveYards => "Offensive Yards",
            StatKey::Touchdowns => "Touchdowns",
            StatKey::Tackles => "Tackles",
            StatKey::Sacks => "Sacks",
            StatKey::Interceptions => "Interceptions",
            StatKey::YardsPerGame => "Yards / Game",
            StatKey::TouchdownsPerGame => "Touchdowns / Game",
            StatKey::TacklesPerGame => "Tackles / Game",
            StatKey::SacksPerGame => "Sacks / Game",
        }
    }

    /// The metric value for one record, or `None` where the per-game policy
    /// leaves it undefined (zero games played). Counting stats are always
    /// defined.
    pub fn value(&self, row: &PlayerSeasonRecord) -> Option<f64> {
        match self {
            StatKey::PassingYards => Some(f64::from(row.passing_yards)),
            StatKey::RushingYards => Some(f64::from(row.rushing_yards)),
            StatKey::ReceivingYards => Some(f64::from(row.receiving_yards)),
            StatKey::TotalYards => Some(f64::from(row.total_yards())),
            StatKey::OffensiveYards => Some(f64::from(row.offensive_yards())),
            StatKey::Touchdowns => Some(f64::from(row.touchdowns)),
            StatKey::Tackles => Some(f64::from(row.tackles)),
            StatKey::Sacks => Some(f64::from(row.sacks)),
            StatKey::Interceptions => Some(f64::from(row.interceptions)),
            StatKey::YardsPerGame => row.yards_per_game(),
            StatKey::TouchdownsPerGame => row.touchdowns_per_game(),
            StatKey::TacklesPerGame => row.tackles_per_game(),
            StatKey::SacksPerGame => row.sacks_per_game(),
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The `n` records with the largest value of `key`, non-increasing.
///
/// Records whose metric is undefined are outside the order entirely, not
/// treated as zero. Ties keep their original relative order, so the result
/// length is min(n, eligible records).
pub fn top_n<'a>(
    rows: &'a [PlayerSeasonRecord],
    key: StatKey,
    n: usize,
) -> Vec<&'a PlayerSeasonRecord> {
    let mut ranked: Vec<(&PlayerSeasonRecord, f64)> = rows
        .iter()
        .filter_map(|row| key.value(row).map(|v| (row, v)))
        .collect();
    // sort_by is stable, so equal values keep dataset order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().take(n).map(|(row, _)| row).collect()
}
