use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::aggregator::collect_records;
use crate::utils::{LOG_DIR_ENV, resolve_log_dir};

#[derive(Parser, Debug)]
#[command(name = "daslog-clean")]
#[command(version = "0.1.0")]
#[command(
    about = "Print Cozmo Daslog entries as time-ordered, pipe-separated records",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the Daslog files [default: ~/Documents/CozmoLogs]
    #[arg(env = LOG_DIR_ENV)]
    pub log_dir: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let log_dir = resolve_log_dir(cli.log_dir)?;

    // Nothing is printed unless every file succeeds
    let records = collect_records(&log_dir)
        .with_context(|| format!("Incorrect log directory : {}", log_dir.display()))?;

    let mut out = io::stdout().lock();
    for record in &records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;

    Ok(())
}
