use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::roster::PlayerSeasonRecord;
use crate::synth;

/// Where the dashboard keeps its stats table, relative to the working dir.
pub const DEFAULT_DATA_PATH: &str = "data/cjfl_stats.csv";

pub fn load_dataset(path: &Path) -> Result<Vec<PlayerSeasonRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("open {}", path.display()))?;
    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<PlayerSeasonRecord>().enumerate() {
        let row = result.with_context(|| format!("decode row {} of {}", idx + 1, path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Write the dataset atomically: serialize next to the target, then rename.
pub fn save_dataset(path: &Path, rows: &[PlayerSeasonRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create data dir {}", parent.display()))?;
        }
    }

    let tmp = path.with_extension("csv.tmp");
    let mut writer =
        csv::Writer::from_path(&tmp).with_context(|| format!("open {}", tmp.display()))?;
    for row in rows {
        writer.serialize(row).context("serialize player row")?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", tmp.display()))?;
    drop(writer);

    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))?;
    Ok(())
}

/// Load the persisted table, or synthesize it on first use.
///
/// First call may generate and write; every later call reads the file back,
/// so the seed only matters until the file exists. A missing file is not an
/// error; a file that exists but fails to parse is.
pub fn load_or_generate(path: &Path, seed: u64) -> Result<Vec<PlayerSeasonRecord>> {
    if path.exists() {
        return load_dataset(path);
    }
    info!(
        "no dataset at {}, generating with seed {seed}",
        path.display()
    );
    let rows = synth::generate(seed);
    save_dataset(path, &rows)?;
    Ok(rows)
}
