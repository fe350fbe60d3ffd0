use std::collections::BTreeSet;

use cjfl_stats::filter::{FilterCriteria, filter_records};
use cjfl_stats::roster::{PlayerSeasonRecord, Position};
use cjfl_stats::synth;

fn record(
    name: &str,
    team: &str,
    position: Position,
    season: u16,
) -> PlayerSeasonRecord {
    PlayerSeasonRecord {
        player_name: name.to_string(),
        team: team.to_string(),
        position,
        season,
        games_played: 10,
        passing_yards: 0,
        rushing_yards: 100,
        receiving_yards: 0,
        touchdowns: 1,
        tackles: 0,
        sacks: 0,
        interceptions: 0,
    }
}

fn sample_rows() -> Vec<PlayerSeasonRecord> {
    vec![
        record("Alex Morgan", "Calgary Colts", Position::RB, 2022),
        record("Ben Carter", "Regina Thunder", Position::QB, 2023),
        record("Casey Morganfield", "Calgary Colts", Position::WR, 2023),
        record("Drew Ellis", "Okanagan Sun", Position::DB, 2024),
    ]
}

#[test]
fn empty_criteria_passes_everything() {
    let rows = sample_rows();
    let criteria = FilterCriteria::default();
    assert!(criteria.is_unrestricted());
    assert_eq!(filter_records(&rows, &criteria), rows);
}

#[test]
fn season_filter_selects_exactly_matching_rows() {
    let rows = sample_rows();
    let criteria = FilterCriteria {
        seasons: BTreeSet::from([2023]),
        ..FilterCriteria::default()
    };
    let filtered = filter_records(&rows, &criteria);
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|r| r.season == 2023));
}

#[test]
fn predicates_combine_with_and() {
    let rows = sample_rows();
    let criteria = FilterCriteria {
        seasons: BTreeSet::from([2023]),
        teams: BTreeSet::from(["Calgary Colts".to_string()]),
        positions: BTreeSet::from([Position::WR]),
        name_search: String::new(),
    };
    let filtered = filter_records(&rows, &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].player_name, "Casey Morganfield");
}

#[test]
fn name_search_is_case_insensitive_substring() {
    let rows = sample_rows();
    let criteria = FilterCriteria {
        name_search: "MORGAN".to_string(),
        ..FilterCriteria::default()
    };
    let filtered = filter_records(&rows, &criteria);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].player_name, "Alex Morgan");
    assert_eq!(filtered[1].player_name, "Casey Morganfield");
}

#[test]
fn empty_result_is_not_an_error() {
    let rows = sample_rows();
    let criteria = FilterCriteria {
        teams: BTreeSet::from(["Winnipeg Rifles".to_string()]),
        ..FilterCriteria::default()
    };
    assert!(filter_records(&rows, &criteria).is_empty());
}

#[test]
fn filter_returns_subset_and_leaves_input_untouched() {
    let rows = synth::generate(7);
    let before = rows.clone();
    let criteria = FilterCriteria {
        positions: BTreeSet::from([Position::QB, Position::RB]),
        ..FilterCriteria::default()
    };
    let filtered = filter_records(&rows, &criteria);

    assert_eq!(rows, before);
    assert!(filtered.len() <= rows.len());
    for row in &filtered {
        assert!(rows.contains(row));
    }
}
