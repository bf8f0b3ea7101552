use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_architecture_smells() -> PathBuf {
    PathBuf::from("DesigniteResults/ArchitectureSmells.csv")
}

fn default_type_metrics() -> PathBuf {
    PathBuf::from("DesigniteResults/TypeMetrics.csv")
}

fn default_coverage_dir() -> PathBuf {
    PathBuf::from("JacocoResults")
}

fn default_decoupling_summary() -> PathBuf {
    PathBuf::from("DV8Results/dv8-analysis-result/analysis-summary.html")
}

/// Where the external tools leave their artifacts, relative to a snapshot
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactLayout {
    #[serde(default = "default_architecture_smells")]
    pub architecture_smells: PathBuf,
    #[serde(default = "default_type_metrics")]
    pub type_metrics: PathBuf,
    #[serde(default = "default_coverage_dir")]
    pub coverage_dir: PathBuf,
    #[serde(default = "default_decoupling_summary")]
    pub decoupling_summary: PathBuf,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self {
            architecture_smells: default_architecture_smells(),
            type_metrics: default_type_metrics(),
            coverage_dir: default_coverage_dir(),
            decoupling_summary: default_decoupling_summary(),
        }
    }
}

impl ArtifactLayout {
    /// All configured paths with their config key, for validation.
    pub fn entries(&self) -> [(&'static str, &Path); 4] {
        [
            ("layout.architecture_smells", self.architecture_smells.as_path()),
            ("layout.type_metrics", self.type_metrics.as_path()),
            ("layout.coverage_dir", self.coverage_dir.as_path()),
            ("layout.decoupling_summary", self.decoupling_summary.as_path()),
        ]
    }
}
