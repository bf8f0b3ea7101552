//! Per-package grouping of type metrics and coverage.

use crate::records::{TestCoverageRecord, TypeMetricsRecord};
use serde::Serialize;
use std::collections::HashMap;

/// Type metrics summed for one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeMetricsGroup {
    pub package: String,
    pub class_count: u64,
    pub lines_of_code: u64,
    pub fan_in_sum: u64,
    pub fan_out_sum: u64,
}

impl TypeMetricsGroup {
    fn new(package: &str) -> Self {
        Self {
            package: package.to_string(),
            ..Self::default()
        }
    }

    fn add(&mut self, record: &TypeMetricsRecord) {
        self.class_count += 1;
        self.lines_of_code += record.lines_of_code;
        self.fan_in_sum += record.fan_in;
        self.fan_out_sum += record.fan_out;
    }

    /// `((fan_in + fan_out) / 2) / classes²` as a percentage; 0 with no classes.
    pub fn propagation_cost(&self) -> f64 {
        if self.class_count == 0 {
            return 0.0;
        }
        let average_coupling = (self.fan_in_sum + self.fan_out_sum) as f64 / 2.0;
        let classes = self.class_count as f64;
        average_coupling / (classes * classes) * 100.0
    }
}

/// Group records by package, preserving the order packages first appear in.
pub fn group_type_metrics(records: &[TypeMetricsRecord]) -> Vec<TypeMetricsGroup> {
    let mut groups: Vec<TypeMetricsGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.package.as_str()).or_insert_with(|| {
            groups.push(TypeMetricsGroup::new(&record.package));
            groups.len() - 1
        });
        groups[slot].add(record);
    }

    groups
}

/// Instruction counts summed over every coverage report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoverageTotals {
    pub covered: u64,
    pub missed: u64,
}

impl CoverageTotals {
    /// `covered * 100 / (covered + missed)`; 0 with no instructions.
    pub fn percentage(&self) -> f64 {
        let total = self.covered + self.missed;
        if total == 0 {
            return 0.0;
        }
        (self.covered * 100) as f64 / total as f64
    }
}

impl std::ops::Add for CoverageTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            covered: self.covered + other.covered,
            missed: self.missed + other.missed,
        }
    }
}

/// Sum coverage per package across all reports.
pub fn group_coverage(records: &[TestCoverageRecord]) -> HashMap<String, CoverageTotals> {
    let mut totals: HashMap<String, CoverageTotals> = HashMap::new();
    for record in records {
        let entry = totals.entry(record.package.clone()).or_default();
        entry.covered += record.instructions_covered;
        entry.missed += record.instructions_missed;
    }
    totals
}
