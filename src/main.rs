use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};

use cjfl_stats::filter::{FilterCriteria, filter_records};
use cjfl_stats::rankings::{LEADERBOARD_KEYS, top_n};
use cjfl_stats::roster::Position;
use cjfl_stats::store;
use cjfl_stats::team_report::{all_team_totals, league_summary};

const DEFAULT_SEED: u64 = 2024;
const DEFAULT_TOP: usize = 10;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse()?;
    let rows = store::load_or_generate(&args.data_path, args.seed)?;
    let filtered = filter_records(&rows, &args.criteria);

    if filtered.is_empty() {
        println!("No records match the current filters.");
        return Ok(());
    }

    let summary = league_summary(&filtered);
    println!("CJFL Player Statistics");
    println!("======================");
    println!("Records:        {}", summary.records);
    println!("Unique players: {}", summary.unique_players);
    println!("Teams:          {}", summary.teams);
    println!(
        "Seasons:        {}",
        summary
            .seasons
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Touchdowns:     {}", summary.touchdowns);
    println!("Total yards:    {}", summary.total_yards);

    for key in LEADERBOARD_KEYS {
        println!();
        println!("Top {} by {}", args.top, key.label());
        for (rank, row) in top_n(&filtered, key, args.top).iter().enumerate() {
            let value = key.value(row).unwrap_or_default();
            println!(
                "{:>3}. {} ({}, {}) - {:.0} ({})",
                rank + 1,
                row.player_name,
                row.team,
                row.position,
                value,
                row.season
            );
        }
    }

    println!();
    println!("Team totals");
    let mut teams = all_team_totals(&filtered);
    teams.sort_by(|a, b| b.total_yards().cmp(&a.total_yards()));
    for totals in &teams {
        println!(
            "{}: {} players, {} total yards, {} TDs",
            totals.team,
            totals.players,
            totals.total_yards(),
            totals.touchdowns
        );
    }

    Ok(())
}

struct Args {
    data_path: PathBuf,
    seed: u64,
    top: usize,
    criteria: FilterCriteria,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut data_path = PathBuf::from(store::DEFAULT_DATA_PATH);
        let mut seed = DEFAULT_SEED;
        let mut top = DEFAULT_TOP;
        let mut criteria = FilterCriteria::default();

        for arg in std::env::args().skip(1) {
            if let Some(path) = arg.strip_prefix("--data=") {
                data_path = PathBuf::from(path.trim());
            } else if let Some(raw) = arg.strip_prefix("--seed=") {
                seed = raw.trim().parse().context("--seed expects an integer")?;
            } else if let Some(raw) = arg.strip_prefix("--top=") {
                top = raw.trim().parse().context("--top expects an integer")?;
            } else if let Some(raw) = arg.strip_prefix("--season=") {
                criteria.seasons = parse_seasons(raw)?;
            } else if let Some(raw) = arg.strip_prefix("--team=") {
                criteria.teams.insert(raw.trim().to_string());
            } else if let Some(raw) = arg.strip_prefix("--position=") {
                criteria.positions = parse_positions(raw)?;
            } else if let Some(raw) = arg.strip_prefix("--search=") {
                criteria.name_search = raw.trim().to_string();
            } else {
                anyhow::bail!(
                    "unknown argument '{arg}' (expected --data= --seed= --top= \
                     --season= --team= --position= --search=)"
                );
            }
        }

        Ok(Self {
            data_path,
            seed,
            top,
            criteria,
        })
    }
}

fn parse_seasons(raw: &str) -> Result<BTreeSet<u16>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u16>()
                .with_context(|| format!("invalid season '{s}'"))
        })
        .collect()
}

fn parse_positions(raw: &str) -> Result<BTreeSet<Position>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Position>().map_err(|err| anyhow::anyhow!(err)))
        .collect()
}
