use async_trait::async_trait;
use dnsperf_domain::{DomainError, StorageKey};

/// Raw entry of the measurement log, as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub key: String,
    pub value: Vec<u8>,
}

/// Ordered, append-only key-value log the benchmark run writes into.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Durably persists one value. A second `put` with the same key overwrites.
    ///
    /// # Errors
    ///
    /// * `DomainError::StoreWrite` - If the value could not be committed
    async fn put(&self, key: &StorageKey, value: Vec<u8>) -> Result<(), DomainError>;

    /// Returns up to `limit` entries with keys strictly greater than `after`
    /// (or from the first key when `after` is `None`), in ascending key order.
    ///
    /// # Errors
    ///
    /// * `DomainError::StoreRead` - If the log could not be read
    async fn scan_after(
        &self,
        after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<StoredEntry>, DomainError>;
}
