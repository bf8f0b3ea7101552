//! Running every snapshot under a results root.

use super::{discover_snapshots, process_snapshot, SnapshotOutcome};
use crate::config::SmellmapConfig;
use crate::errors::Result;
use crate::progress::ProgressConfig;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of a batch run, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub root: PathBuf,
    pub outcomes: Vec<SnapshotOutcome>,
}

/// Process every snapshot under `root`. The first failing snapshot aborts the
/// run; reports already written stay on disk.
pub fn run_batch(root: &Path, config: &SmellmapConfig, progress: ProgressConfig) -> Result<BatchSummary> {
    let snapshots = discover_snapshots(root)?;
    if snapshots.is_empty() {
        warn!(root = %root.display(), "no snapshot directories found");
    }

    let bar = progress.snapshot_bar(snapshots.len() as u64);
    let process = |snapshot: &PathBuf| {
        let outcome = process_snapshot(snapshot, config);
        bar.inc(1);
        outcome
    };

    let outcomes = if config.parallel.enabled {
        snapshots.par_iter().map(process).collect::<Result<Vec<_>>>()
    } else {
        snapshots.iter().map(process).collect::<Result<Vec<_>>>()
    };
    bar.finish_and_clear();
    let outcomes = outcomes?;

    info!(
        root = %root.display(),
        snapshots = outcomes.len(),
        workers = config.parallel.worker_count(),
        "batch complete"
    );
    Ok(BatchSummary {
        root: root.to_path_buf(),
        outcomes,
    })
}
