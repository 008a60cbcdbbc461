mod config;
mod progress;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gem_mirror::{DEFAULT_JOBS, MirrorDriver};
use gem_mirror_fetch::RemoteFetcher;

use crate::progress::ConsoleProgress;

#[derive(Parser)]
#[command(name = "gem-mirror")]
#[command(about = "Mirror remote gem repositories to local directories")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sync every configured mirror pair
    Mirror {
        /// Config file (defaults to ~/.gemmirrorrc)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of concurrent package fetches
        #[arg(long, default_value_t = DEFAULT_JOBS)]
        jobs: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Mirror { config, jobs } => {
            let path = match config {
                Some(path) => path,
                None => config::config_path().context("could not determine home directory")?,
            };
            let pairs = config::load_config(&path)?;

            let driver = MirrorDriver::new(RemoteFetcher::new()).with_jobs(jobs);
            let reports = driver.run(&pairs, &ConsoleProgress::new()).await?;

            // Individual package failures are already printed; they do not
            // affect the exit code.
            let failed: usize = reports.iter().map(|r| r.failed).sum();
            if failed > 0 {
                eprintln!("{failed} gem(s) failed to mirror");
            }

            Ok(())
        }
    }
}
