//! Record persistence: JSON files in an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::record::RunRecord;

/// Create the output directory if it does not exist.
pub fn ensure_output_dir(dir: &Path) -> crate::Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Persist one record as pretty JSON, returning the written path.
///
/// The filename follows [`RunRecord::file_stem`], so a rerun of the same
/// (engine, task, object, timestep) combination overwrites its previous
/// record rather than accumulating duplicates.
pub fn save_record(dir: &Path, record: &RunRecord) -> crate::Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(format!("{}.json", record.file_stem()));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json)?;
    info!(path = %path.display(), verdict = %record.verdict, "saved run record");
    Ok(path)
}

/// Scan a directory and load every record in it.
///
/// Files that do not follow the record naming convention, or that fail to
/// parse, are skipped with a warning rather than failing the whole scan:
/// the output directory legitimately also holds videos and the rendered
/// report. A missing directory yields an empty list.
///
/// Records are returned sorted by (engine, object, timestep) for stable
/// report ordering.
pub fn load_records(dir: &Path) -> crate::Result<Vec<RunRecord>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if RunRecord::parse_stem(stem).is_err() {
            continue; // not a run record (report manifest etc.)
        }

        match fs::read_to_string(&path)
            .map_err(crate::ReportError::from)
            .and_then(|text| Ok(serde_json::from_str::<RunRecord>(&text)?))
        {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable record");
            }
        }
    }

    records.sort_by(|a, b| {
        a.engine
            .cmp(&b.engine)
            .then(a.object.cmp(&b.object))
            .then(a.timestep.total_cmp(&b.timestep))
    });
    Ok(records)
}
