// Export modules for library usage
pub mod aggregation;
pub mod cli;
pub mod config;
pub mod errors;
pub mod progress;
pub mod records;
pub mod report;
pub mod snapshot;
pub mod summary;

// Re-export commonly used types
pub use crate::aggregation::{
    aggregate, AggregationInputs, PackageAggregate, SnapshotAggregate, SystemAggregate,
    SystemMetricsInput,
};

pub use crate::config::{load_config, SmellmapConfig, SystemMetricsSource};

pub use crate::errors::{ErrorCode, Result, SnapshotError};

pub use crate::records::{
    load_coverage_dir, read_architecture_smells, read_type_metrics, ArchitectureSmellRecord,
    TestCoverageRecord, TypeMetricsRecord, ALL_PACKAGES_KEY,
};

pub use crate::report::{write_report_file, ReportOptions, ReportTable, ReportWriter};

pub use crate::snapshot::{discover_snapshots, process_snapshot, run_batch, SnapshotOutcome};

pub use crate::summary::{read_system_scalar_metrics, SystemScalarMetrics};
