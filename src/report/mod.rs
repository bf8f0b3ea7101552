//! Rendering aggregates into the per-snapshot report.
//!
//! The column set is derived from the snapshot itself: one column per
//! observed smell category, in sorted order, between the package name and the
//! fixed metric columns. The decoupling column only exists when the system
//! metrics came from the external summary.

pub mod csv;
pub mod format;
pub mod terminal;

pub use csv::{write_report_file, CsvWriter, ReportWriter};
pub use terminal::render_summary_table;

use crate::aggregation::{PackageAggregate, SnapshotAggregate, SystemAggregate};
use format::{optional_percent, percent};

/// Label of the final, system-wide row.
pub const SYSTEM_ROW_LABEL: &str = "all";

pub const PACKAGE_COLUMN: &str = "package";
pub const TOTAL_SMELLS_COLUMN: &str = "totalSmells";
pub const PROPAGATION_COST_COLUMN: &str = "propagationCost";
pub const DECOUPLING_LEVEL_COLUMN: &str = "decouplingLevel";
pub const CODE_COVERAGE_COLUMN: &str = "codeCoverage";
pub const LINES_OF_CODE_COLUMN: &str = "linesOfCode";
pub const CLASS_COUNT_COLUMN: &str = "classCount";

/// Formatting knobs for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Decimals for percentage cells.
    pub precision: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { precision: 1 }
    }
}

/// A fully rendered report: header plus string cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub header: Vec<String>,
    /// Package rows in aggregate order, then the system row.
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn from_aggregate(aggregate: &SnapshotAggregate, options: ReportOptions) -> Self {
        let with_decoupling = aggregate.system.decoupling_level.is_some();

        let mut rows: Vec<Vec<String>> = aggregate
            .packages
            .iter()
            .map(|package| package_row(package, with_decoupling, options))
            .collect();
        rows.push(system_row(&aggregate.system, options));

        Self {
            header: header(&aggregate.categories, with_decoupling),
            rows,
        }
    }

    /// The system row, always last.
    pub fn system_row(&self) -> Option<&[String]> {
        self.rows.last().map(Vec::as_slice)
    }
}

fn header(categories: &[String], with_decoupling: bool) -> Vec<String> {
    let mut header = Vec::with_capacity(categories.len() + 7);
    header.push(PACKAGE_COLUMN.to_string());
    header.extend(categories.iter().cloned());
    header.push(TOTAL_SMELLS_COLUMN.to_string());
    header.push(PROPAGATION_COST_COLUMN.to_string());
    if with_decoupling {
        header.push(DECOUPLING_LEVEL_COLUMN.to_string());
    }
    header.push(CODE_COVERAGE_COLUMN.to_string());
    header.push(LINES_OF_CODE_COLUMN.to_string());
    header.push(CLASS_COUNT_COLUMN.to_string());
    header
}

fn package_row(package: &PackageAggregate, with_decoupling: bool, options: ReportOptions) -> Vec<String> {
    let mut row = Vec::with_capacity(package.smell_counts.len() + 7);
    row.push(package.package.clone());
    row.extend(package.smell_counts.iter().map(u64::to_string));
    row.push(package.total_smells.to_string());
    row.push(percent(package.propagation_cost, options.precision));
    if with_decoupling {
        // Decoupling level is a system-wide figure only.
        row.push(String::new());
    }
    row.push(optional_percent(
        package.coverage.map(|totals| totals.percentage()),
        options.precision,
    ));
    row.push(package.lines_of_code.to_string());
    row.push(package.class_count.to_string());
    row
}

fn system_row(system: &SystemAggregate, options: ReportOptions) -> Vec<String> {
    let mut row = Vec::with_capacity(system.smell_counts.len() + 7);
    row.push(SYSTEM_ROW_LABEL.to_string());
    row.extend(system.smell_counts.iter().map(u64::to_string));
    row.push(system.total_smells.to_string());
    row.push(percent(system.propagation_cost, options.precision));
    if let Some(level) = system.decoupling_level {
        row.push(percent(level, options.precision));
    }
    row.push(optional_percent(
        system.coverage.map(|totals| totals.percentage()),
        options.precision,
    ));
    row.push(system.lines_of_code.to_string());
    row.push(system.class_count.to_string());
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{aggregate, AggregationInputs, SystemMetricsInput};
    use crate::records::{ArchitectureSmellRecord, TypeMetricsRecord};
    use crate::summary::SystemScalarMetrics;

    fn reference_inputs() -> (Vec<ArchitectureSmellRecord>, Vec<TypeMetricsRecord>) {
        let smell = |category: &str| ArchitectureSmellRecord {
            package: "p1".to_string(),
            smell_category: category.to_string(),
        };
        (
            vec![
                smell("God Component"),
                smell("God Component"),
                smell("Cyclic Dependency"),
            ],
            vec![TypeMetricsRecord {
                package: "p1".to_string(),
                class_name: "A".to_string(),
                lines_of_code: 100,
                fan_in: 3,
                fan_out: 2,
            }],
        )
    }

    #[test]
    fn test_reference_rows() {
        let (smells, types) = reference_inputs();
        let aggregate = aggregate(
            AggregationInputs {
                smells: &smells,
                type_metrics: &types,
                coverage: &[],
            },
            SystemMetricsInput::ComputeFromFanIn,
        );
        let table = ReportTable::from_aggregate(&aggregate, ReportOptions::default());

        assert_eq!(
            table.header,
            vec![
                "package",
                "Cyclic Dependency",
                "God Component",
                "totalSmells",
                "propagationCost",
                "codeCoverage",
                "linesOfCode",
                "classCount"
            ]
        );
        assert_eq!(
            table.rows[0],
            vec!["p1", "1", "2", "3", "250.0%", "", "100", "1"]
        );
        assert_eq!(
            table.system_row().unwrap(),
            ["all", "1", "2", "3", "300.0%", "", "100", "1"]
        );
    }

    #[test]
    fn test_decoupling_column_only_with_external_metrics() {
        let (smells, types) = reference_inputs();
        let aggregate = aggregate(
            AggregationInputs {
                smells: &smells,
                type_metrics: &types,
                coverage: &[],
            },
            SystemMetricsInput::External(SystemScalarMetrics {
                decoupling_level: 45.3,
                propagation_cost: Some(12.0),
            }),
        );
        let table = ReportTable::from_aggregate(&aggregate, ReportOptions { precision: 2 });

        let position = table
            .header
            .iter()
            .position(|column| column == DECOUPLING_LEVEL_COLUMN)
            .unwrap();
        assert_eq!(table.header[position - 1], PROPAGATION_COST_COLUMN);
        assert_eq!(table.rows[0][position], "");
        assert_eq!(table.system_row().unwrap()[position], "45.30%");
        assert_eq!(table.system_row().unwrap()[position - 1], "12.00%");
        assert!(table.rows.iter().all(|row| row.len() == table.header.len()));
    }

    #[test]
    fn test_no_smells_emits_base_columns() {
        let aggregate = aggregate(
            AggregationInputs {
                smells: &[],
                type_metrics: &[],
                coverage: &[],
            },
            SystemMetricsInput::ComputeFromFanIn,
        );
        let table = ReportTable::from_aggregate(&aggregate, ReportOptions::default());
        assert_eq!(table.header.len(), 6);
        assert_eq!(table.rows, vec![vec!["all", "0", "0.0%", "", "0", "0"]]);
    }
}
