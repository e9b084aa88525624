//! # dnsperf
//!
//! Measures A-record lookup latency for every server × domain pair and
//! appends one record per lookup to the measurement log.

use clap::Parser;
use dnsperf::bootstrap::{init_logging, load_config, log_config_summary};
use dnsperf::runner::run_benchmark;
use dnsperf_domain::CliOverrides;
use dnsperf_infrastructure::dns::UdpLookupResolver;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnsperf")]
#[command(version)]
#[command(about = "DNS lookup latency benchmark")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Server list (`ipAddress, description` per line)
    #[arg(short = 's', long)]
    servers: Option<String>,

    /// Domain list (one domain per line)
    #[arg(short = 'd', long)]
    domains: Option<String>,

    /// Measurement store path
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Number of passes over the full server × domain matrix
    #[arg(short = 'n', long)]
    numiter: Option<u32>,

    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        servers_file: cli.servers,
        domains_file: cli.domains,
        iterations: cli.numiter,
        store_path: cli.output,
        database_path: None,
        verbose: cli.verbose,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    log_config_summary(&config, cli.config.as_deref());

    info!("Starting dnsperf v{}", env!("CARGO_PKG_VERSION"));

    let summary = run_benchmark(&config, Arc::new(UdpLookupResolver::new())).await?;

    info!(
        lookups = summary.lookups,
        failed = summary.failed_lookups,
        empty = summary.empty_answers,
        "Done"
    );
    Ok(())
}
