//! Runtime setup for the CLI: logging, the rayon pool and config overrides.

use super::args::CommonArgs;
use crate::config::{load_config, SmellmapConfig};
use crate::errors::Result;
use tracing_subscriber::EnvFilter;

/// Log level implied by the verbosity flags when `RUST_LOG` is unset.
pub fn default_log_level(verbosity: u8, quiet: bool) -> &'static str {
    match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for `--json` output.
pub fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbosity, quiet)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Configure rayon global thread pool once at startup. `threads == 0` leaves
/// the choice to rayon.
pub fn configure_thread_pool(threads: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if threads > 0 {
        builder = builder.num_threads(threads);
    }

    if let Err(e) = builder.build_global() {
        tracing::debug!("thread pool already configured: {}", e);
    }
}

/// Load the config file and layer the command line over it.
pub fn resolve_config(common: &CommonArgs) -> Result<SmellmapConfig> {
    let config = load_config(common.config.as_deref())?;
    apply_overrides(config, common)
}

/// Flags win over file values. The result is validated again since flags
/// can break the same rules the file can.
pub fn apply_overrides(mut config: SmellmapConfig, common: &CommonArgs) -> Result<SmellmapConfig> {
    if let Some(source) = common.system_metrics {
        config.system_metrics = source;
    }
    if let Some(precision) = common.precision {
        config.precision = precision;
    }
    if let Some(name) = &common.output_name {
        config.output_name = name.clone();
    }
    config.validate()?;
    Ok(config)
}
