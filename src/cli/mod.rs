//! Command-line interface for smellmap
//!
//! - Argument parsing (`args`)
//! - Runtime setup: logging, thread pool, config overrides (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, CommonArgs, Commands};
pub use setup::{
    apply_overrides, configure_thread_pool, default_log_level, init_tracing, resolve_config,
};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
