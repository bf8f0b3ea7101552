//! Parallelism configuration for batch runs.
//!
//! Snapshots share no state, so a batch run can fan out across rayon's
//! thread pool one snapshot per task.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Configuration for parallel snapshot processing.
///
/// # Example
///
/// ```rust
/// use smellmap::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     jobs: 4,
/// };
/// assert_eq!(config.worker_count(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Process snapshots concurrently (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads; 0 means all available cores.
    #[serde(default)]
    pub jobs: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: 0,
        }
    }
}

impl ParallelConfig {
    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            jobs: 1,
        }
    }

    /// Resolve `jobs` to a concrete thread count.
    pub fn worker_count(&self) -> usize {
        if !self.enabled {
            return 1;
        }
        if self.jobs == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        } else {
            self.jobs
        }
    }
}
