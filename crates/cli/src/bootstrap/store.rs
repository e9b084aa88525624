use dnsperf_infrastructure::store::RedbMeasurementStore;
use tracing::error;

/// Opens the measurement log for a benchmark run, creating it if needed.
pub fn create_store(path: &str) -> anyhow::Result<RedbMeasurementStore> {
    RedbMeasurementStore::create(path).map_err(|e| {
        error!("Failed to open measurement store: {}", e);
        anyhow::anyhow!(e)
    })
}

/// Opens an existing measurement log for migration.
pub fn open_store(path: &str) -> anyhow::Result<RedbMeasurementStore> {
    RedbMeasurementStore::open(path).map_err(|e| {
        error!("Failed to open measurement store: {}", e);
        anyhow::anyhow!(e)
    })
}
