use std::collections::BTreeMap;

use cjfl_stats::roster::Position;
use cjfl_stats::synth::{self, MAX_PLAYERS_PER_SEASON, MIN_PLAYERS_PER_SEASON, SEASONS, TEAMS};

#[test]
fn same_seed_gives_identical_datasets() {
    assert_eq!(synth::generate(42), synth::generate(42));
}

#[test]
fn different_seeds_give_different_datasets() {
    assert_ne!(synth::generate(1), synth::generate(2));
}

#[test]
fn every_season_has_a_bounded_player_count() {
    let rows = synth::generate(42);
    let mut per_season: BTreeMap<u16, usize> = BTreeMap::new();
    for row in &rows {
        *per_season.entry(row.season).or_default() += 1;
    }

    assert_eq!(
        per_season.keys().copied().collect::<Vec<_>>(),
        SEASONS.to_vec()
    );
    for count in per_season.values() {
        assert!((MIN_PLAYERS_PER_SEASON..=MAX_PLAYERS_PER_SEASON).contains(count));
    }
}

#[test]
fn stats_respect_position_conditioning() {
    for row in synth::generate(42) {
        assert!(TEAMS.contains(&row.team.as_str()));
        assert!((8..=12).contains(&row.games_played));

        match row.position {
            Position::QB => {
                assert!(row.passing_yards >= 1500);
                assert!(row.rushing_yards >= 100);
                assert_eq!(row.receiving_yards, 0);
                assert!(row.touchdowns >= 15);
            }
            Position::RB => {
                assert_eq!(row.passing_yards, 0);
                assert!(row.rushing_yards >= 800);
                assert!(row.receiving_yards >= 100);
                assert!(row.touchdowns >= 8);
            }
            Position::WR | Position::TE => {
                assert_eq!(row.passing_yards, 0);
                assert!(row.rushing_yards < 200);
                assert!(row.receiving_yards >= 400);
                assert!(row.touchdowns >= 3);
            }
            _ => {
                assert_eq!(row.passing_yards, 0);
                assert_eq!(row.rushing_yards, 0);
                assert_eq!(row.receiving_yards, 0);
                assert_eq!(row.touchdowns, 0);
            }
        }

        if row.position.is_defensive() {
            assert!((20..80).contains(&row.tackles));
        } else {
            assert_eq!(row.tackles, 0);
        }
        if !row.position.records_sacks() {
            assert_eq!(row.sacks, 0);
        }
        if !row.position.records_interceptions() {
            assert_eq!(row.interceptions, 0);
        } else {
            assert!(row.interceptions < 5);
        }
    }
}
