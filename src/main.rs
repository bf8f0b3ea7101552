use anyhow::{Context, Result};
use colored::Colorize;
use smellmap::cli::{self, Cli, CommonArgs, Commands};
use smellmap::progress::ProgressConfig;
use smellmap::report::render_summary_table;
use smellmap::{process_snapshot, run_batch, SnapshotError};

fn main() {
    let cli = cli::parse_args();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<SnapshotError>() {
            Some(e) => {
                let label = format!("error[{}]:", e.code());
                eprintln!("{} {}", label.red().bold(), err);
                std::process::exit(e.exit_code());
            }
            None => {
                eprintln!("{} {}", "error:".red().bold(), err);
                std::process::exit(1);
            }
        }
    }
}

fn init_runtime(common: &CommonArgs) {
    cli::init_tracing(common.verbosity, common.quiet);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Snapshot { path, common } => {
            init_runtime(&common);
            let config = cli::resolve_config(&common)?;
            let outcome = process_snapshot(&path, &config)?;
            if !common.quiet {
                println!("{}", outcome.report.display());
            }
            Ok(())
        }
        Commands::Batch {
            root,
            no_parallel,
            jobs,
            summary,
            json,
            common,
        } => {
            init_runtime(&common);
            let mut config = cli::resolve_config(&common)?;
            if no_parallel {
                config.parallel.enabled = false;
            }
            if jobs > 0 {
                config.parallel.jobs = jobs;
            }
            cli::configure_thread_pool(config.parallel.worker_count());

            let progress = ProgressConfig::from_env(common.quiet);
            let batch = run_batch(&root, &config, progress)?;

            if json {
                let rendered = serde_json::to_string_pretty(&batch)
                    .context("Failed to serialize batch summary")?;
                println!("{rendered}");
            } else if summary {
                println!("{}", render_summary_table(&batch.outcomes, config.precision));
            } else if !common.quiet {
                println!(
                    "{} {} report(s) under {}",
                    "wrote".green(),
                    batch.outcomes.len(),
                    batch.root.display()
                );
            }
            Ok(())
        }
    }
}
