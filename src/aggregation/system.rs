//! The system row: a reduction over the finished package table.

use super::package::CoverageTotals;
use super::PackageAggregate;
use crate::summary::SystemScalarMetrics;
use serde::Serialize;

/// How the system row obtains its architectural metrics.
///
/// Built from [`crate::config::SystemMetricsSource`] once the snapshot's
/// artifacts are loaded, so the external variant always carries its values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SystemMetricsInput {
    /// `Σ fan_in / classes²` over every reported class.
    ComputeFromFanIn,
    /// Values read from the decoupling analyzer's summary.
    External(SystemScalarMetrics),
}

/// System-wide report values, labelled `all` in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemAggregate {
    pub smell_counts: Vec<u64>,
    pub total_smells: u64,
    /// Percent.
    pub propagation_cost: f64,
    /// Percent; only present with external metrics.
    pub decoupling_level: Option<f64>,
    /// `None` when no reported package had coverage records.
    pub coverage: Option<CoverageTotals>,
    pub lines_of_code: u64,
    pub class_count: u64,
}

impl SystemAggregate {
    /// Fold the package table and the unattributed smell counts into the
    /// system row.
    pub fn reduce(
        packages: &[PackageAggregate],
        unattributed_smells: &[u64],
        metrics: SystemMetricsInput,
    ) -> Self {
        let smell_counts: Vec<u64> = unattributed_smells
            .iter()
            .enumerate()
            .map(|(column, unattributed)| {
                unattributed
                    + packages
                        .iter()
                        .map(|package| package.smell_counts[column])
                        .sum::<u64>()
            })
            .collect();

        let coverage = packages
            .iter()
            .filter_map(|package| package.coverage)
            .reduce(|total, next| total + next);

        let class_count: u64 = packages.iter().map(|package| package.class_count).sum();
        let fan_in_sum: u64 = packages.iter().map(|package| package.fan_in_sum).sum();

        let (propagation_cost, decoupling_level) = match metrics {
            SystemMetricsInput::ComputeFromFanIn => {
                (system_propagation_cost(fan_in_sum, class_count), None)
            }
            SystemMetricsInput::External(scalars) => (
                scalars
                    .propagation_cost
                    .unwrap_or_else(|| system_propagation_cost(fan_in_sum, class_count)),
                Some(scalars.decoupling_level),
            ),
        };

        Self {
            total_smells: smell_counts.iter().sum(),
            smell_counts,
            propagation_cost,
            decoupling_level,
            coverage,
            lines_of_code: packages.iter().map(|package| package.lines_of_code).sum(),
            class_count,
        }
    }
}

/// `Σ fan_in / classes²` as a percentage; 0 with no classes.
///
/// Unlike the package formula this uses fan-in alone, without averaging in
/// fan-out.
pub fn system_propagation_cost(fan_in_sum: u64, class_count: u64) -> f64 {
    if class_count == 0 {
        return 0.0;
    }
    let classes = class_count as f64;
    fan_in_sum as f64 / (classes * classes) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(counts: Vec<u64>, classes: u64, fan_in: u64, coverage: Option<(u64, u64)>) -> PackageAggregate {
        PackageAggregate {
            package: "p".to_string(),
            total_smells: counts.iter().sum(),
            smell_counts: counts,
            propagation_cost: 0.0,
            coverage: coverage.map(|(covered, missed)| CoverageTotals { covered, missed }),
            lines_of_code: 10,
            class_count: classes,
            fan_in_sum: fan_in,
        }
    }

    #[test]
    fn test_system_cost_uses_fan_in_only() {
        // 2 classes, fan-in 1: 1 / 4 = 25%
        assert_eq!(system_propagation_cost(1, 2), 25.0);
        assert_eq!(system_propagation_cost(7, 0), 0.0);
    }

    #[test]
    fn test_reduce_sums_packages_and_unattributed() {
        let packages = vec![
            package(vec![1, 0], 1, 2, Some((10, 10))),
            package(vec![2, 3], 1, 0, None),
        ];
        let system = SystemAggregate::reduce(&packages, &[0, 4], SystemMetricsInput::ComputeFromFanIn);

        assert_eq!(system.smell_counts, vec![3, 7]);
        assert_eq!(system.total_smells, 10);
        assert_eq!(system.class_count, 2);
        assert_eq!(system.lines_of_code, 20);
        assert_eq!(system.propagation_cost, 50.0);
        assert_eq!(system.decoupling_level, None);
        assert_eq!(
            system.coverage,
            Some(CoverageTotals {
                covered: 10,
                missed: 10
            })
        );
    }

    #[test]
    fn test_no_coverage_anywhere_is_none() {
        let packages = vec![package(vec![], 3, 0, None)];
        let system = SystemAggregate::reduce(&packages, &[], SystemMetricsInput::ComputeFromFanIn);
        assert_eq!(system.coverage, None);
        assert!(system.smell_counts.is_empty());
    }

    #[test]
    fn test_external_without_cost_falls_back_to_fan_in() {
        let packages = vec![package(vec![], 2, 1, None)];
        let system = SystemAggregate::reduce(
            &packages,
            &[],
            SystemMetricsInput::External(SystemScalarMetrics {
                decoupling_level: 61.2,
                propagation_cost: None,
            }),
        );
        assert_eq!(system.propagation_cost, 25.0);
        assert_eq!(system.decoupling_level, Some(61.2));
    }

    #[test]
    fn test_external_cost_wins_when_present() {
        let packages = vec![package(vec![], 2, 1, None)];
        let system = SystemAggregate::reduce(
            &packages,
            &[],
            SystemMetricsInput::External(SystemScalarMetrics {
                decoupling_level: 61.2,
                propagation_cost: Some(7.5),
            }),
        );
        assert_eq!(system.propagation_cost, 7.5);
    }

    #[test]
    fn test_empty_snapshot() {
        let system = SystemAggregate::reduce(&[], &[], SystemMetricsInput::ComputeFromFanIn);
        assert_eq!(system.propagation_cost, 0.0);
        assert_eq!(system.class_count, 0);
    }
}
