//! Joining a snapshot's datasets into report-ready aggregates.
//!
//! The join runs in two strictly separate steps:
//!
//! 1. Build the per-package table. Rows follow the order in which packages
//!    first appear in the type metrics, every package carries its smell
//!    counts aligned to the sorted category vocabulary, and coverage is
//!    present only when at least one coverage record named the package.
//! 2. Reduce that table (plus the `<All packages>` smells) into the system
//!    row. Nothing is accumulated while the package rows are built, so the
//!    system totals cannot depend on iteration order.
//!
//! Packages that only appear in the smell data have no class or LOC context
//! and are left out of both steps; they are reported in
//! [`SnapshotAggregate::orphaned_packages`].

pub mod package;
pub mod smells;
pub mod system;

pub use package::{group_coverage, group_type_metrics, CoverageTotals, TypeMetricsGroup};
pub use smells::PackageSmellCounts;
pub use system::{SystemAggregate, SystemMetricsInput};

use crate::records::{
    ArchitectureSmellRecord, TestCoverageRecord, TypeMetricsRecord, ALL_PACKAGES_KEY,
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// Everything loaded for one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct AggregationInputs<'a> {
    pub smells: &'a [ArchitectureSmellRecord],
    pub type_metrics: &'a [TypeMetricsRecord],
    pub coverage: &'a [TestCoverageRecord],
}

/// One package's report values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageAggregate {
    pub package: String,
    /// Aligned with [`SnapshotAggregate::categories`].
    pub smell_counts: Vec<u64>,
    pub total_smells: u64,
    /// Percent.
    pub propagation_cost: f64,
    pub coverage: Option<CoverageTotals>,
    pub lines_of_code: u64,
    pub class_count: u64,
    pub fan_in_sum: u64,
}

/// The joined result for one snapshot. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotAggregate {
    /// Sorted smell categories; one report column each.
    pub categories: Vec<String>,
    pub packages: Vec<PackageAggregate>,
    pub system: SystemAggregate,
    /// Smell packages with no type metrics, sorted.
    pub orphaned_packages: Vec<String>,
}

/// Join the datasets and derive package and system metrics.
pub fn aggregate(inputs: AggregationInputs<'_>, system_metrics: SystemMetricsInput) -> SnapshotAggregate {
    let smell_counts = PackageSmellCounts::fold(inputs.smells);
    let categories = smell_counts.categories();
    let groups = group_type_metrics(inputs.type_metrics);
    let coverage = group_coverage(inputs.coverage);

    let packages: Vec<PackageAggregate> = groups
        .iter()
        .filter(|group| group.package != ALL_PACKAGES_KEY)
        .map(|group| {
            let counts = smell_counts.counts_for(&group.package, &categories);
            PackageAggregate {
                package: group.package.clone(),
                total_smells: counts.iter().sum(),
                smell_counts: counts,
                propagation_cost: group.propagation_cost(),
                coverage: coverage.get(&group.package).copied(),
                lines_of_code: group.lines_of_code,
                class_count: group.class_count,
                fan_in_sum: group.fan_in_sum,
            }
        })
        .collect();

    let orphaned_packages = orphaned_packages(&smell_counts, &groups);
    if !orphaned_packages.is_empty() {
        warn!(
            count = orphaned_packages.len(),
            packages = ?orphaned_packages,
            "smells reported for packages without type metrics; left out of the report"
        );
    }

    let unattributed = smell_counts.counts_for(ALL_PACKAGES_KEY, &categories);
    let system = SystemAggregate::reduce(&packages, &unattributed, system_metrics);

    SnapshotAggregate {
        categories,
        packages,
        system,
        orphaned_packages,
    }
}

fn orphaned_packages(smells: &PackageSmellCounts, groups: &[TypeMetricsGroup]) -> Vec<String> {
    let known: HashSet<&str> = groups.iter().map(|group| group.package.as_str()).collect();
    let mut orphans: Vec<String> = smells
        .packages()
        .filter(|package| *package != ALL_PACKAGES_KEY && !known.contains(package))
        .map(str::to_string)
        .collect();
    orphans.sort();
    orphans
}
