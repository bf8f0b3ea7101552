//! Typed records read from a snapshot's tabular artifacts.
//!
//! Each submodule owns one source: its positional schema and the function
//! that loads it. The record types are plain data and carry no behaviour.

pub mod coverage;
pub mod smells;
pub mod table;
pub mod type_metrics;

pub use coverage::{load_coverage_dir, read_coverage_file};
pub use smells::read_architecture_smells;
pub use table::{parse_table, read_table, Row, TableSchema};
pub use type_metrics::read_type_metrics;

use serde::Serialize;

/// Package key used for smells that are not attributed to a single package.
pub const ALL_PACKAGES_KEY: &str = "<All packages>";

/// One detected architecture smell instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureSmellRecord {
    pub package: String,
    pub smell_category: String,
}

/// Structural metrics for one analyzed type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMetricsRecord {
    pub package: String,
    pub class_name: String,
    pub lines_of_code: u64,
    pub fan_in: u64,
    pub fan_out: u64,
}

/// Instruction coverage for one class from one coverage report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCoverageRecord {
    pub package: String,
    pub class_name: String,
    pub instructions_covered: u64,
    pub instructions_missed: u64,
}
