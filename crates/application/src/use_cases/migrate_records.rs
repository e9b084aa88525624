use dnsperf_domain::{DomainError, MeasurementRecord, PerfRow};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::ports::{MeasurementStore, PerfRowSink};
use crate::services::StoreScan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MigrationSummary {
    pub scanned: u64,
    pub inserted: u64,
    pub already_present: u64,
}

/// Copies every record of the measurement log into the `perf` table.
///
/// The pass is linear and stops at the first record that cannot be decoded or
/// inserted. Rows inserted before that point stay committed. Re-running is
/// safe: rows whose `id` already exists are left untouched.
pub struct MigrateRecordsUseCase {
    store: Arc<dyn MeasurementStore>,
    sink: Arc<dyn PerfRowSink>,
    batch_size: Option<usize>,
}

impl MigrateRecordsUseCase {
    pub fn new(store: Arc<dyn MeasurementStore>, sink: Arc<dyn PerfRowSink>) -> Self {
        Self {
            store,
            sink,
            batch_size: None,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<MigrationSummary, DomainError> {
        self.sink.ensure_table().await?;

        let mut scan = match self.batch_size {
            Some(size) => StoreScan::with_batch_size(Arc::clone(&self.store), size),
            None => StoreScan::new(Arc::clone(&self.store)),
        };
        let mut summary = MigrationSummary::default();

        while let Some(entry) = scan.next().await? {
            summary.scanned += 1;

            let record = MeasurementRecord::decode(&entry.key, &entry.value).map_err(|e| {
                error!(error = %e, key = %entry.key, "Could not decode record, stopping migration");
                e
            })?;

            let row = PerfRow::from(&record);
            let inserted = self.sink.insert_if_absent(&row).await.map_err(|e| {
                error!(error = %e, key = %entry.key, id = %row.id, "Could not insert record, stopping migration");
                DomainError::InsertFailed {
                    key: entry.key.clone(),
                    id: row.id.clone(),
                    reason: e.to_string(),
                }
            })?;

            if inserted {
                summary.inserted += 1;
            } else {
                summary.already_present += 1;
                debug!(key = %entry.key, id = %row.id, "Row already present");
            }
        }

        info!(
            scanned = summary.scanned,
            inserted = summary.inserted,
            already_present = summary.already_present,
            "Migration finished"
        );

        Ok(summary)
    }
}
