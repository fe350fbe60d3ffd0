use std::collections::BTreeSet;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cjfl_stats::filter::{FilterCriteria, filter_records};
use cjfl_stats::rankings::{StatKey, top_n};
use cjfl_stats::roster::Position;
use cjfl_stats::synth;
use cjfl_stats::team_report::all_team_totals;

fn bench_filter(c: &mut Criterion) {
    let rows = synth::generate(42);
    let criteria = FilterCriteria {
        seasons: BTreeSet::from([2023]),
        positions: BTreeSet::from([Position::QB, Position::RB, Position::WR]),
        name_search: "an".to_string(),
        ..FilterCriteria::default()
    };

    c.bench_function("filter_records", |b| {
        b.iter(|| {
            let filtered = filter_records(black_box(&rows), black_box(&criteria));
            black_box(filtered.len());
        })
    });
}

fn bench_top_n(c: &mut Criterion) {
    let rows = synth::generate(42);

    c.bench_function("top_n_yards_per_game", |b| {
        b.iter(|| {
            let ranked = top_n(black_box(&rows), StatKey::YardsPerGame, 10);
            black_box(ranked.len());
        })
    });
}

fn bench_team_totals(c: &mut Criterion) {
    let rows = synth::generate(42);

    c.bench_function("all_team_totals", |b| {
        b.iter(|| {
            let totals = all_team_totals(black_box(&rows));
            black_box(totals.len());
        })
    });
}

criterion_group!(benches, bench_filter, bench_top_n, bench_team_totals);
criterion_main!(benches);
