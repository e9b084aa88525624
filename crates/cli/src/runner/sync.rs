use dnsperf_application::use_cases::{MigrateRecordsUseCase, MigrationSummary};
use dnsperf_domain::Config;
use std::sync::Arc;
use tracing::info;

use crate::bootstrap::{init_database, open_store};

/// Copies the whole measurement log into the `perf` table.
pub async fn run_sync(config: &Config) -> anyhow::Result<MigrationSummary> {
    let store = Arc::new(open_store(&config.store.path)?);
    let sink = Arc::new(init_database(&config.database).await?);

    let summary = MigrateRecordsUseCase::new(store, sink).execute().await?;

    info!(
        store = %config.store.path,
        database = %config.database.path,
        inserted = summary.inserted,
        "Sync complete"
    );
    Ok(summary)
}
