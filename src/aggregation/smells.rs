//! Folding smell instances into per-package counts.

use crate::records::ArchitectureSmellRecord;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// package -> (category -> count)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSmellCounts {
    counts: HashMap<String, BTreeMap<String, u64>>,
}

impl PackageSmellCounts {
    /// Count every record. Repeated package/category pairs add up.
    pub fn fold(records: &[ArchitectureSmellRecord]) -> Self {
        let mut counts: HashMap<String, BTreeMap<String, u64>> = HashMap::new();
        for record in records {
            *counts
                .entry(record.package.clone())
                .or_default()
                .entry(record.smell_category.clone())
                .or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Sorted, deduplicated category vocabulary.
    pub fn categories(&self) -> Vec<String> {
        self.counts
            .values()
            .flat_map(|by_category| by_category.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Counts for `package` laid out in `categories` order. Unknown packages
    /// get all zeros.
    pub fn counts_for(&self, package: &str, categories: &[String]) -> Vec<u64> {
        let by_category = self.counts.get(package);
        categories
            .iter()
            .map(|category| {
                by_category
                    .and_then(|counts| counts.get(category))
                    .copied()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
