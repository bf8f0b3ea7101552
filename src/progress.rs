//! Progress feedback for batch runs.
//!
//! - **Quiet Mode**: no progress output (`--quiet` or `SMELLMAP_QUIET`)
//! - **Non-TTY**: progress bars are hidden in CI and piped output

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_SNAPSHOTS: &str = "{msg} {bar:30} {pos}/{len} snapshots ({percent}%) - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool) -> Self {
        let env_quiet = std::env::var("SMELLMAP_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
        }
    }

    /// Determine if progress bars should be displayed
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// Bar counting processed snapshots; hidden when progress is off.
    pub fn snapshot_bar(&self, len: u64) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        match ProgressStyle::default_bar().template(TEMPLATE_SNAPSHOTS) {
            Ok(style) => pb.set_style(style.progress_chars("█▓▒░  ")),
            Err(e) => tracing::debug!("progress template rejected: {e}"),
        }
        pb.set_message("Writing reports");
        pb
    }
}
