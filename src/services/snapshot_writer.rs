use std::fs;
use std::path::Path;
use chrono::{DateTime, Local, SecondsFormat};
use crate::errors::{TrackerError, TrackerResult};
use crate::structs::category_coverage::CategoryMap;
use crate::structs::tracker_snapshot::TrackerSnapshot;

pub struct SnapshotWriter;

impl SnapshotWriter {
    pub fn build(
        timestamp: DateTime<Local>,
        categories: CategoryMap,
        priority_list: &[String],
        next_target: Option<String>,
    ) -> TrackerSnapshot {
        TrackerSnapshot {
            last_updated: timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
            categories,
            priority_list: priority_list.to_vec(),
            next_target,
        }
    }

    /// Replaces the file at `path` with the snapshot. Nothing from an earlier snapshot is kept.
    pub fn write(snapshot: &TrackerSnapshot, path: &Path) -> TrackerResult<()> {
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(path, content + "\n")
            .map_err(|e| TrackerError::snapshot_write_error(&path.display().to_string(), &e.to_string()))?;

        log::info!("💾 Snapshot written to {}", path.display());
        Ok(())
    }

    pub fn read(path: &Path) -> TrackerResult<TrackerSnapshot> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| TrackerError::snapshot_read_error(&display, &e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| TrackerError::snapshot_read_error(&display, &e.to_string()))
    }
}
