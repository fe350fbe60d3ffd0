use std::collections::BTreeSet;

use crate::roster::{PlayerSeasonRecord, Position};

/// Caller-selected predicates over the dataset.
///
/// An empty set means "no restriction on this field", never "match
/// nothing": an empty multi-select in the presentation layer must keep
/// every row visible. An empty `name_search` likewise passes everything;
/// a non-empty one matches as a case-insensitive substring of the player
/// name. All four predicates are combined with AND.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub seasons: BTreeSet<u16>,
    pub teams: BTreeSet<String>,
    pub positions: BTreeSet<Position>,
    pub name_search: String,
}

impl FilterCriteria {
    pub fn is_unrestricted(&self) -> bool {
        self.seasons.is_empty()
            && self.teams.is_empty()
            && self.positions.is_empty()
            && self.name_search.is_empty()
    }
}

/// Narrow `rows` to the records matching `criteria`.
///
/// Returns a new, independent collection in the original row order; the
/// input is never mutated. An empty result is a valid outcome, not an
/// error.
pub fn filter_records(
    rows: &[PlayerSeasonRecord],
    criteria: &FilterCriteria,
) -> Vec<PlayerSeasonRecord> {
    let needle = criteria.name_search.to_lowercase();
    rows.iter()
        .filter(|row| {
            if !criteria.seasons.is_empty() && !criteria.seasons.contains(&row.season) {
                return false;
            }
            if !criteria.teams.is_empty() && !criteria.teams.contains(&row.team) {
                return false;
            }
            if !criteria.positions.is_empty() && !criteria.positions.contains(&row.position) {
                return false;
            }
            if !needle.is_empty() && !row.player_name.to_lowercase().contains(&needle) {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}
