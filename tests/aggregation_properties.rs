//! Property-based tests for snapshot aggregation
//!
//! These tests verify invariants that should hold for all inputs:
//! - The category vocabulary is sorted and duplicate free
//! - Every row has one count per category and a matching total
//! - System smell counts equal package counts plus unattributed smells
//! - System LOC and class count are sums over the package rows
//! - Package order follows first appearance in the type metrics

use proptest::prelude::*;
use smellmap::records::{ArchitectureSmellRecord, TypeMetricsRecord, ALL_PACKAGES_KEY};
use smellmap::report::{ReportOptions, ReportTable};
use smellmap::{aggregate, AggregationInputs, SystemMetricsInput};

const TYPED_PACKAGES: &[&str] = &["api", "core", "rm", "tm"];
const PACKAGES: &[&str] = &["api", "core", "rm", "tm", ALL_PACKAGES_KEY, "orphan"];
const CATEGORIES: &[&str] = &[
    "Cyclic Dependency",
    "Dense Structure",
    "God Component",
    "Unstable Dependency",
];

fn smell_record() -> impl Strategy<Value = ArchitectureSmellRecord> {
    (
        prop::sample::select(PACKAGES),
        prop::sample::select(CATEGORIES),
    )
        .prop_map(|(package, category)| ArchitectureSmellRecord {
            package: package.to_string(),
            smell_category: category.to_string(),
        })
}

fn type_record() -> impl Strategy<Value = TypeMetricsRecord> {
    (
        prop::sample::select(TYPED_PACKAGES),
        0u64..2_000,
        0u64..50,
        0u64..50,
    )
        .prop_map(|(package, loc, fan_in, fan_out)| TypeMetricsRecord {
            package: package.to_string(),
            class_name: "C".to_string(),
            lines_of_code: loc,
            fan_in,
            fan_out,
        })
}

proptest! {
    #[test]
    fn prop_categories_sorted_and_unique(
        smells in prop::collection::vec(smell_record(), 0..40),
        types in prop::collection::vec(type_record(), 0..20),
    ) {
        let result = aggregate(
            AggregationInputs { smells: &smells, type_metrics: &types, coverage: &[] },
            SystemMetricsInput::ComputeFromFanIn,
        );

        let mut expected = result.categories.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(&result.categories, &expected);
        for category in smells.iter().map(|s| &s.smell_category) {
            prop_assert!(result.categories.contains(category));
        }
    }

    #[test]
    fn prop_rows_aligned_with_header(
        smells in prop::collection::vec(smell_record(), 0..40),
        types in prop::collection::vec(type_record(), 0..20),
    ) {
        let result = aggregate(
            AggregationInputs { smells: &smells, type_metrics: &types, coverage: &[] },
            SystemMetricsInput::ComputeFromFanIn,
        );
        for package in &result.packages {
            prop_assert_eq!(package.smell_counts.len(), result.categories.len());
            prop_assert_eq!(package.total_smells, package.smell_counts.iter().sum::<u64>());
        }

        let table = ReportTable::from_aggregate(&result, ReportOptions::default());
        prop_assert_eq!(table.rows.len(), result.packages.len() + 1);
        for row in &table.rows {
            prop_assert_eq!(row.len(), table.header.len());
        }
        prop_assert_eq!(table.system_row().map(|row| row[0].as_str()), Some("all"));
    }

    #[test]
    fn prop_system_row_is_reduction_of_package_rows(
        smells in prop::collection::vec(smell_record(), 0..40),
        types in prop::collection::vec(type_record(), 0..20),
    ) {
        let result = aggregate(
            AggregationInputs { smells: &smells, type_metrics: &types, coverage: &[] },
            SystemMetricsInput::ComputeFromFanIn,
        );

        for (column, category) in result.categories.iter().enumerate() {
            let unattributed = smells
                .iter()
                .filter(|s| s.package == ALL_PACKAGES_KEY && &s.smell_category == category)
                .count() as u64;
            let from_packages: u64 = result.packages.iter().map(|p| p.smell_counts[column]).sum();
            prop_assert_eq!(result.system.smell_counts[column], from_packages + unattributed);
        }

        let loc: u64 = types.iter().map(|t| t.lines_of_code).sum();
        prop_assert_eq!(result.system.lines_of_code, loc);
        prop_assert_eq!(result.system.class_count, types.len() as u64);
        prop_assert_eq!(
            result.system.total_smells,
            result.system.smell_counts.iter().sum::<u64>()
        );
    }

    #[test]
    fn prop_package_order_is_first_appearance(
        types in prop::collection::vec(type_record(), 0..20),
    ) {
        let result = aggregate(
            AggregationInputs { smells: &[], type_metrics: &types, coverage: &[] },
            SystemMetricsInput::ComputeFromFanIn,
        );

        let mut first_seen: Vec<&str> = Vec::new();
        for record in &types {
            if !first_seen.contains(&record.package.as_str()) {
                first_seen.push(&record.package);
            }
        }
        let order: Vec<&str> = result.packages.iter().map(|p| p.package.as_str()).collect();
        prop_assert_eq!(order, first_seen);
    }

    #[test]
    fn prop_propagation_costs_non_negative_and_finite(
        types in prop::collection::vec(type_record(), 0..20),
    ) {
        let result = aggregate(
            AggregationInputs { smells: &[], type_metrics: &types, coverage: &[] },
            SystemMetricsInput::ComputeFromFanIn,
        );
        for package in &result.packages {
            prop_assert!(package.propagation_cost.is_finite());
            prop_assert!(package.propagation_cost >= 0.0);
        }
        prop_assert!(result.system.propagation_cost.is_finite());
        if types.is_empty() {
            prop_assert_eq!(result.system.propagation_cost, 0.0);
        }
    }
}
