use crate::config::SystemMetricsSource;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "smellmap")]
#[command(about = "Join architecture smell, type metric, coverage and decoupling artifacts into per-snapshot CSV reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the report for a single snapshot directory
    Snapshot {
        /// Snapshot directory holding the tool artifacts
        path: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write reports for every <project>/<snapshot> directory under a results root
    Batch {
        /// Results root directory
        root: PathBuf,

        /// Process snapshots one at a time
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Print each snapshot's system row as a table when done
        #[arg(long = "summary", conflicts_with = "json")]
        summary: bool,

        /// Print the batch outcome as JSON when done
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Options shared by every command. Unset values fall back to the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Configuration file (default: nearest .smellmap.toml)
    #[arg(long = "config", env = "SMELLMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source of the system row's propagation cost and decoupling level
    #[arg(long = "system-metrics", value_enum)]
    pub system_metrics: Option<SystemMetricsSource>,

    /// Decimals for percentage cells
    #[arg(long = "precision")]
    pub precision: Option<usize>,

    /// Report file name inside each snapshot directory
    #[arg(long = "output-name")]
    pub output_name: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Only log errors and hide progress
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbosity")]
    pub quiet: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
