//! Processing one snapshot directory end to end.
//!
//! Loads the four artifacts (as two concurrent halves), joins them and writes
//! the report next to them. Nothing is shared between snapshots, so callers
//! are free to run many of these at once.

pub mod batch;
pub mod discovery;

pub use batch::{run_batch, BatchSummary};
pub use discovery::discover_snapshots;

use crate::aggregation::{aggregate, AggregationInputs, SystemAggregate, SystemMetricsInput};
use crate::config::{ArtifactLayout, SmellmapConfig};
use crate::errors::{Result, SnapshotError};
use crate::records::{load_coverage_dir, read_architecture_smells, read_type_metrics};
use crate::report::{write_report_file, ReportOptions};
use crate::summary::read_system_scalar_metrics;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, Span};

/// Absolute artifact paths for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub root: PathBuf,
    pub architecture_smells: PathBuf,
    pub type_metrics: PathBuf,
    pub coverage_dir: PathBuf,
    pub decoupling_summary: PathBuf,
    pub output: PathBuf,
}

impl SnapshotPaths {
    pub fn resolve(root: &Path, layout: &ArtifactLayout, output_name: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            architecture_smells: root.join(&layout.architecture_smells),
            type_metrics: root.join(&layout.type_metrics),
            coverage_dir: root.join(&layout.coverage_dir),
            decoupling_summary: root.join(&layout.decoupling_summary),
            output: root.join(output_name),
        }
    }
}

/// What a processed snapshot produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotOutcome {
    pub snapshot: PathBuf,
    pub report: PathBuf,
    pub package_count: usize,
    pub category_count: usize,
    pub system: SystemAggregate,
}

impl SnapshotOutcome {
    /// `<project>/<snapshot>` when the path has both, otherwise the path.
    pub fn label(&self) -> String {
        let mut parts = self
            .snapshot
            .components()
            .rev()
            .take(2)
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        parts.reverse();
        parts.join("/")
    }
}

/// Load, aggregate and write the report for `dir`.
///
/// Every event emitted while processing, including those from rayon workers
/// reading artifacts, is recorded inside a `snapshot` span.
pub fn process_snapshot(dir: &Path, config: &SmellmapConfig) -> Result<SnapshotOutcome> {
    let span = info_span!("snapshot", path = %dir.display());
    span.in_scope(|| process_in_span(dir, config, &span))
}

fn process_in_span(dir: &Path, config: &SmellmapConfig, span: &Span) -> Result<SnapshotOutcome> {
    if !dir.is_dir() {
        return Err(SnapshotError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "snapshot directory not found"),
        ));
    }

    let paths = SnapshotPaths::resolve(dir, &config.layout, &config.output_name);
    let use_summary = config.system_metrics.uses_external_summary();

    // Stolen halves run on other workers, which do not share this thread's
    // current span.
    let ((smells, type_metrics), (coverage, scalars)) = rayon::join(
        || {
            rayon::join(
                || span.in_scope(|| read_architecture_smells(&paths.architecture_smells)),
                || span.in_scope(|| read_type_metrics(&paths.type_metrics)),
            )
        },
        || {
            rayon::join(
                || span.in_scope(|| load_coverage_dir(&paths.coverage_dir)),
                || {
                    span.in_scope(|| {
                        use_summary
                            .then(|| read_system_scalar_metrics(&paths.decoupling_summary))
                            .transpose()
                    })
                },
            )
        },
    );
    let smells = smells?;
    let type_metrics = type_metrics?;
    let coverage = coverage?;
    let system_metrics = match scalars? {
        Some(scalars) => SystemMetricsInput::External(scalars),
        None => SystemMetricsInput::ComputeFromFanIn,
    };

    let aggregate = aggregate(
        AggregationInputs {
            smells: &smells,
            type_metrics: &type_metrics,
            coverage: &coverage,
        },
        system_metrics,
    );
    debug!(
        packages = aggregate.packages.len(),
        categories = aggregate.categories.len(),
        "aggregated snapshot"
    );

    write_report_file(
        &paths.output,
        &aggregate,
        ReportOptions {
            precision: config.precision,
        },
    )?;
    info!(report = %paths.output.display(), "wrote report");

    Ok(SnapshotOutcome {
        snapshot: paths.root,
        report: paths.output,
        package_count: aggregate.packages.len(),
        category_count: aggregate.categories.len(),
        system: aggregate.system,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;
    use tracing::{Dispatch, Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::registry::LookupSpan;

    /// Records the outermost span of every event (`None` when outside any span).
    #[derive(Clone, Default)]
    struct RootSpans(Arc<Mutex<Vec<Option<&'static str>>>>);

    impl<S> Layer<S> for RootSpans
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let root = ctx
                .event_scope(event)
                .and_then(|scope| scope.from_root().next().map(|span| span.name()));
            self.0.lock().unwrap().push(root);
        }
    }

    fn write_snapshot(root: &Path) {
        let designite = root.join("DesigniteResults");
        fs::create_dir_all(&designite).unwrap();
        fs::write(
            designite.join("ArchitectureSmells.csv"),
            "Project Name,Package Name,Architecture Smell\ndemo,p1,God Component\n",
        )
        .unwrap();
        fs::write(
            designite.join("TypeMetrics.csv"),
            "Project Name,Package Name,Type Name,NOF,NOPF,NOM,NOPM,LOC,WMC,NC,DIT,LCOM,FANIN,FANOUT\n\
             demo,p1,A,0,0,1,1,10,1,0,0,0,1,1\n",
        )
        .unwrap();
        let coverage = root.join("JacocoResults");
        fs::create_dir_all(&coverage).unwrap();
        fs::write(
            coverage.join("jacoco.csv"),
            "GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED\ng,p1,A,1,3\n",
        )
        .unwrap();
    }

    #[test]
    fn test_paths_follow_layout() {
        let paths = SnapshotPaths::resolve(
            Path::new("/r/apollo/s1"),
            &ArtifactLayout::default(),
            "output.csv",
        );
        assert_eq!(
            paths.type_metrics,
            PathBuf::from("/r/apollo/s1/DesigniteResults/TypeMetrics.csv")
        );
        assert_eq!(
            paths.decoupling_summary,
            PathBuf::from("/r/apollo/s1/DV8Results/dv8-analysis-result/analysis-summary.html")
        );
        assert_eq!(paths.output, PathBuf::from("/r/apollo/s1/output.csv"));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let err = process_snapshot(Path::new("/no/such/snapshot"), &SmellmapConfig::default())
            .unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_worker_events_recorded_in_snapshot_span() {
        let dir = TempDir::new().unwrap();
        write_snapshot(dir.path());
        let spans = RootSpans::default();
        let dispatch = Dispatch::new(tracing_subscriber::registry().with(spans.clone()));
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .spawn_handler(|thread| {
                let dispatch = dispatch.clone();
                std::thread::spawn(move || {
                    tracing::dispatcher::with_default(&dispatch, || thread.run())
                });
                Ok(())
            })
            .build()
            .unwrap();

        pool.install(|| process_snapshot(dir.path(), &SmellmapConfig::default()))
            .unwrap();

        let recorded = spans.0.lock().unwrap();
        // smells, type metrics, coverage, aggregation and the written report
        assert!(recorded.len() >= 5, "recorded {recorded:?}");
        assert!(recorded.iter().all(|root| *root == Some("snapshot")));
    }
}
