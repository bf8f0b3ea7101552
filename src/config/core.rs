use serde::{Deserialize, Serialize};

use super::layout::ArtifactLayout;
use super::parallel::ParallelConfig;
use crate::errors::{Result, SnapshotError};

/// Largest number of decimals accepted for percentage cells.
pub const MAX_PRECISION: usize = 6;

fn default_precision() -> usize {
    1
}

fn default_output_name() -> String {
    "output.csv".to_string()
}

/// Where the system row's propagation cost (and decoupling level) come from.
///
/// Chosen once per run. The two sources disagree by construction: the
/// computed value uses fan-in only, the external one is the decoupling
/// analyzer's own figure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum SystemMetricsSource {
    /// System propagation cost from summed fan-in; no decoupling column.
    #[default]
    #[serde(rename = "compute")]
    #[value(name = "compute")]
    ComputeFromFanIn,
    /// Decoupling level and propagation cost from the analyzer's HTML summary.
    #[serde(rename = "external")]
    #[value(name = "external")]
    ReadFromExternalSummary,
}

impl SystemMetricsSource {
    pub fn uses_external_summary(self) -> bool {
        matches!(self, Self::ReadFromExternalSummary)
    }
}

/// Root configuration structure for smellmap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmellmapConfig {
    /// Source of system-level metrics
    #[serde(default)]
    pub system_metrics: SystemMetricsSource,

    /// Decimals for percentage cells
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Report file name written into each snapshot directory
    #[serde(default = "default_output_name")]
    pub output_name: String,

    #[serde(default)]
    pub parallel: ParallelConfig,

    #[serde(default)]
    pub layout: ArtifactLayout,
}

impl Default for SmellmapConfig {
    fn default() -> Self {
        Self {
            system_metrics: SystemMetricsSource::default(),
            precision: default_precision(),
            output_name: default_output_name(),
            parallel: ParallelConfig::default(),
            layout: ArtifactLayout::default(),
        }
    }
}

impl SmellmapConfig {
    /// Reject values that would produce an unreadable or misplaced report.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(SnapshotError::config(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }

        let name = self.output_name.trim();
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(SnapshotError::config(format!(
                "output_name must be a plain file name, got '{}'",
                self.output_name
            )));
        }

        for (key, path) in self.layout.entries() {
            if path.as_os_str().is_empty() || path.is_absolute() {
                return Err(SnapshotError::config(format!(
                    "{key} must be a non-empty path relative to the snapshot, got '{}'",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
