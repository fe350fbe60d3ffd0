use std::collections::{BTreeMap, BTreeSet};

use crate::roster::PlayerSeasonRecord;

/// Every counting stat summed across one team's records in the current
/// (typically already filtered) dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamTotals {
    pub team: String,
    pub players: usize,
    pub games_played: u32,
    pub passing_yards: u32,
    pub rushing_yards: u32,
    pub receiving_yards: u32,
    pub touchdowns: u32,
    pub tackles: u32,
    pub sacks: u32,
    pub interceptions: u32,
}

impl TeamTotals {
    pub fn total_yards(&self) -> u32 {
        self.passing_yards + self.rushing_yards + self.receiving_yards
    }

    /// Team rate over the summed roster games; `None` when the roster
    /// played no games, same policy as the per-record rates.
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

    fn add(&mut self, row: &PlayerSeasonRecord) {
        self.players += 1;
        self.games_played += row.games_played;
        self.passing_yards += row.passing_yards;
        self.rushing_yards += row.rushing_yards;
        self.receiving_yards += row.receiving_yards;
        self.touchdowns += row.touchdowns;
        self.tackles += row.tackles;
        self.sacks += row.sacks;
        self.interceptions += row.interceptions;
    }
}

/// Sum one team's stats. A team with no rows yields all-zero totals (and
/// therefore undefined per-game rates).
pub fn team_totals(rows: &[PlayerSeasonRecord], team: &str) -> TeamTotals {
    let mut totals = TeamTotals {
        team: team.to_string(),
        ..TeamTotals::default()
    };
    for row in rows.iter().filter(|r| r.team == team) {
        totals.add(row);
    }
    totals
}

/// Totals for every team present in `rows`, ordered by team name.
pub fn all_team_totals(rows: &[PlayerSeasonRecord]) -> Vec<TeamTotals> {
    let mut by_team: BTreeMap<&str, TeamTotals> = BTreeMap::new();
    for row in rows {
        by_team
            .entry(row.team.as_str())
            .or_insert_with(|| TeamTotals {
                team: row.team.clone(),
                ..TeamTotals::default()
            })
            .add(row);
    }
    by_team.into_values().collect()
}

/// The headline numbers the dashboard shows above the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueSummary {
    pub records: usize,
    pub unique_players: usize,
    pub teams: usize,
    pub seasons: Vec<u16>,
    pub touchdowns: u32,
    pub total_yards: u32,
}

pub fn league_summary(rows: &[PlayerSeasonRecord]) -> LeagueSummary {
    let mut players: BTreeSet<&str> = BTreeSet::new();
    let mut teams: BTreeSet<&str> = BTreeSet::new();
    let mut seasons: BTreeSet<u16> = BTreeSet::new();
    let mut touchdowns = 0u32;
    let mut total_yards = 0u32;

    for row in rows {
        players.insert(row.player_name.as_str());
        teams.insert(row.team.as_str());
        seasons.insert(row.season);
        touchdowns += row.touchdowns;
        total_yards += row.total_yards();
    }

    LeagueSummary {
        records: rows.len(),
        unique_players: players.len(),
        teams: teams.len(),
        seasons: seasons.into_iter().collect(),
        touchdowns,
        total_yards,
    }
}
