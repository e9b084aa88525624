//! # dbsync
//!
//! Copies the measurement log into the SQLite `perf` table. Safe to re-run.

use clap::Parser;
use dnsperf::bootstrap::{init_logging, load_config, log_config_summary};
use dnsperf::runner::run_sync;
use dnsperf_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "dbsync")]
#[command(version)]
#[command(about = "Migrate dnsperf measurements into SQLite")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Measurement store written by dnsperf
    #[arg(long)]
    ldbpath: Option<String>,

    /// SQLite database file
    #[arg(long)]
    sqldbpath: Option<String>,

    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        store_path: cli.ldbpath,
        database_path: cli.sqldbpath,
        verbose: cli.verbose,
        ..Default::default()
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    log_config_summary(&config, cli.config.as_deref());

    info!("Starting dbsync v{}", env!("CARGO_PKG_VERSION"));

    let summary = run_sync(&config).await?;

    info!(
        scanned = summary.scanned,
        inserted = summary.inserted,
        already_present = summary.already_present,
        "Done"
    );
    Ok(())
}
