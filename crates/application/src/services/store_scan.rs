use dnsperf_domain::DomainError;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::ports::{MeasurementStore, StoredEntry};

pub const DEFAULT_SCAN_BATCH: usize = 256;

/// Lazy ascending cursor over the whole measurement log.
///
/// Entries are fetched in batches keyed on the last key seen. A scan can only
/// be restarted by creating a new cursor.
pub struct StoreScan {
    store: Arc<dyn MeasurementStore>,
    batch_size: usize,
    buffer: VecDeque<StoredEntry>,
    last_key: Option<String>,
    exhausted: bool,
}

impl StoreScan {
    pub fn new(store: Arc<dyn MeasurementStore>) -> Self {
        Self::with_batch_size(store, DEFAULT_SCAN_BATCH)
    }

    pub fn with_batch_size(store: Arc<dyn MeasurementStore>, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.max(1),
            buffer: VecDeque::new(),
            last_key: None,
            exhausted: false,
        }
    }

    pub async fn next(&mut self) -> Result<Option<StoredEntry>, DomainError> {
        if self.buffer.is_empty() && !self.exhausted {
            self.fill().await?;
        }
        Ok(self.buffer.pop_front())
    }

    async fn fill(&mut self) -> Result<(), DomainError> {
        let batch = self
            .store
            .scan_after(self.last_key.as_deref(), self.batch_size)
            .await?;

        if batch.len() < self.batch_size {
            self.exhausted = true;
        }
        if let Some(last) = batch.last() {
            self.last_key = Some(last.key.clone());
        }
        self.buffer.extend(batch);
        Ok(())
    }
}
