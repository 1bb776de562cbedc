use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use linqs::cli::Cli;
use linqs::output;
use linqs::report;
use linqs::sample::SampleData;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let exercises = cli.selected();
    debug!(target: "linqs", ?exercises, output = ?cli.output, "starting");

    let data = SampleData::load();
    let sections =
        report::build(&exercises, &data, Utc::now()).context("failed to run exercises")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::render(&sections, cli.output, &mut out).context("failed to write transcript")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Logs go to stderr so the transcript on stdout stays clean.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
