//! Command-line driver for the polarity corpus pipeline
//!
//! Each subcommand is one of the original flat scripts: corpus acquisition,
//! the two corpus assembly variants, and the runtime sanity check.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use polarity::{config::Config, corpus, device, fetch, progress::ProgressReport, Result};
use std::path::PathBuf;

/// Download and prepare the Pang/Lee review polarity corpus, and sanity-check
/// the numerical runtime
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// Base directory under which the corpus is materialized
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, default_value = None)]
    dir: Option<PathBuf>,

    /// Keep English stopwords when cleaning tokens
    #[arg(long, default_value_t = false)]
    keep_stopwords: bool,

    #[command(subcommand)]
    command: Command,
}
//
impl Args {
    /// Decode and validate CLI arguments
    pub fn parse_and_check() -> Result<Self> {
        // Decode CLI arguments
        let args = Args::parse();

        // Check CLI arguments for basic sanity
        if let Some(dir) = &args.dir {
            anyhow::ensure!(
                dir.is_dir(),
                "requested base directory {} does not exist",
                dir.display()
            );
        }
        Ok(args)
    }

    /// Base directory, defaulting to the current working directory
    pub fn base_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("determining the current directory"),
        }
    }
}

/// Pipeline stage to run
#[derive(Subcommand, Debug)]
enum Command {
    /// Download and extract the corpus, doing nothing if it is already there
    Fetch,

    /// Fetch the corpus and assemble it as (label, cleaned tokens) pairs
    Prepare,

    /// Fetch the corpus and assemble it as parallel text/label columns
    Dataset {
        /// Save the assembled dataset as JSON lines at this path
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check the compute backend and smoke-test the random number machinery
    Check,
}
//
#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging
    setup_logging().map_err(|e| anyhow::format_err!("{e}"))?;

    // Decode CLI arguments
    let args = Args::parse_and_check()?;
    let config = Config::new(args.base_dir()?, !args.keep_stopwords);

    // Set up progress reporting
    let report = ProgressReport::new();

    match args.command {
        Command::Fetch => {
            let client = reqwest::Client::new();
            fetch::download_and_extract(config, client, &report).await?;
        }
        Command::Prepare => {
            let client = reqwest::Client::new();
            fetch::download_and_extract(config.clone(), client, &report).await?;
            let corpus = corpus::prepare_corpus(&config, &report).await?;
            log::info!("Prepared {} labeled token sequences", corpus.len());
        }
        Command::Dataset { out } => {
            log::info!("Preparing dataset");
            let client = reqwest::Client::new();
            fetch::download_and_extract(config.clone(), client, &report).await?;
            let dataset = corpus::prepare_dataset(&config).await?;
            log::info!("Assembled a dataset of {} records", dataset.len());
            if let Some(out) = out {
                dataset.save(&out).await?;
                log::info!("Saved the dataset to {}", out.display());
            }
        }
        Command::Check => {
            let platform = device::detect();
            device::check_platform(&platform)?;
            log::info!("Runtime backend: {platform}");
            if platform == "cpu" {
                device::pin_to_cpu();
            }
            device::split_smoke_test();
        }
    }
    Ok(())
}

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
