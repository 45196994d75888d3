use anyhow::{Context, Result};
use clap::Parser;
use expectrun::{Runner, parse_file};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "expectrun",
    about = "Run the subprocess sessions described by an expect script",
    version
)]
struct Args {
    /// Path to the script file
    script: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout is left alone. Respects RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let jobs = parse_file(&args.script)
        .with_context(|| format!("Failed to parse script file: {}", args.script.display()))?;
    tracing::debug!(count = jobs.len(), "parsed script");

    Runner::new()
        .execute(jobs)
        .await
        .context("Failed to execute script")?;

    Ok(())
}
