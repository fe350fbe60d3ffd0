use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use cjfl_stats::store;
use cjfl_stats::synth;

fn main() -> Result<()> {
    env_logger::init();

    let out = parse_path_arg("--out").unwrap_or_else(|| PathBuf::from(store::DEFAULT_DATA_PATH));
    let seed = parse_seed_arg()?.unwrap_or(2024);

    let rows = synth::generate(seed);
    store::save_dataset(&out, &rows)?;

    println!("Dataset generated");
    println!("Path: {}", out.display());
    println!("Seed: {seed}");
    println!("Rows: {}", rows.len());

    let mut per_season: BTreeMap<u16, usize> = BTreeMap::new();
    for row in &rows {
        *per_season.entry(row.season).or_default() += 1;
    }
    for (season, count) in per_season {
        println!("season {season}: {count} players");
    }

    Ok(())
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    let prefix = format!("{flag}=");
    for arg in std::env::args().skip(1) {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}

fn parse_seed_arg() -> Result<Option<u64>> {
    for arg in std::env::args().skip(1) {
        if let Some(raw) = arg.strip_prefix("--seed=") {
            let seed = raw.trim().parse::<u64>().context("--seed expects an integer")?;
            return Ok(Some(seed));
        }
    }
    Ok(None)
}
