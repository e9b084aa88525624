use dnsperf_application::ports::DnsResolver;
use dnsperf_application::use_cases::{RunBenchmarkUseCase, RunSummary};
use dnsperf_domain::Config;
use dnsperf_infrastructure::system::SystemIdentityProvider;
use std::sync::Arc;
use tracing::info;

use crate::bootstrap::{create_store, load_domains, load_servers};

/// One benchmark run: read both lists, open the log, resolve everything.
pub async fn run_benchmark(
    config: &Config,
    resolver: Arc<dyn DnsResolver>,
) -> anyhow::Result<RunSummary> {
    let servers = load_servers(&config.benchmark.servers_file)?;
    let domains = load_domains(&config.benchmark.domains_file)?;
    let store = Arc::new(create_store(&config.store.path)?);

    let use_case = RunBenchmarkUseCase::new(
        resolver,
        Arc::new(SystemIdentityProvider::new()),
        store,
    );
    let summary = use_case
        .execute(&servers, &domains, config.benchmark.iterations)
        .await?;

    info!(
        run_id = %summary.run_id,
        records = summary.records_written,
        store = %config.store.path,
        "Benchmark complete"
    );
    Ok(summary)
}
