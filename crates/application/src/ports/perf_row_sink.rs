use async_trait::async_trait;
use dnsperf_domain::{DomainError, PerfRow};

/// Relational `perf` table the migrator writes into.
#[async_trait]
pub trait PerfRowSink: Send + Sync {
    /// Creates the table if it does not exist yet. Safe to call repeatedly.
    async fn ensure_table(&self) -> Result<(), DomainError>;

    /// Inserts the row unless a row with the same `id` exists.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The row was inserted
    /// * `Ok(false)` - A row with this `id` was already present
    /// * `Err(DomainError)` - If the insert failed
    async fn insert_if_absent(&self, row: &PerfRow) -> Result<bool, DomainError>;

    /// Number of rows currently in the table.
    async fn count(&self) -> Result<u64, DomainError>;
}
