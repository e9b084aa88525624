//! redb-backed measurement log.
//!
//! One table with `&str` keys (`<run start>|<sequence>`) and `&[u8]` values
//! (JSON-serialized measurement records). redb keeps keys sorted, so a range
//! scan replays records in production order. The file is locked by the open
//! handle: one process at a time.

use async_trait::async_trait;
use dnsperf_application::ports::{MeasurementStore, StoredEntry};
use dnsperf_domain::{DomainError, StorageKey};
use redb::{Database, ReadableTable, TableDefinition, TableError};
use std::fmt;
use std::ops::Bound;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Measurements keyed by `{run_started_at}|{sequence:012}`.
pub const MEASUREMENTS: TableDefinition<&str, &[u8]> = TableDefinition::new("measurements");

pub struct RedbMeasurementStore {
    db: Arc<Database>,
    path: PathBuf,
}

impl RedbMeasurementStore {
    /// Opens the log for writing, creating the file if needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Self::open_error(&path, e))?;
        }

        let db = Database::create(&path).map_err(|e| Self::open_error(&path, e))?;

        // Create the table up front so readers never see a missing table.
        let txn = db.begin_write().map_err(|e| Self::open_error(&path, e))?;
        txn.open_table(MEASUREMENTS)
            .map_err(|e| Self::open_error(&path, e))?;
        txn.commit().map_err(|e| Self::open_error(&path, e))?;

        info!(path = %path.display(), "Measurement store opened");
        Ok(Self {
            db: Arc::new(db),
            path,
        })
    }

    /// Opens an existing log. A missing file is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let db = Database::open(&path).map_err(|e| Self::open_error(&path, e))?;

        info!(path = %path.display(), "Measurement store opened");
        Ok(Self {
            db: Arc::new(db),
            path,
        })
    }

    fn open_error(path: &Path, e: impl ToString) -> DomainError {
        DomainError::StoreOpen {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    }

    fn put_blocking(db: &Database, key: &str, value: &[u8]) -> Result<(), DomainError> {
        let write_error = |e: &dyn ToString| DomainError::StoreWrite {
            key: key.to_string(),
            reason: e.to_string(),
        };

        let txn = db.begin_write().map_err(|e| write_error(&e))?;
        {
            let mut table = txn.open_table(MEASUREMENTS).map_err(|e| write_error(&e))?;
            table.insert(key, value).map_err(|e| write_error(&e))?;
        }
        txn.commit().map_err(|e| write_error(&e))?;
        Ok(())
    }

    fn scan_blocking(
        db: &Database,
        after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<StoredEntry>, DomainError> {
        let read_error = |e: &dyn ToString| DomainError::StoreRead(e.to_string());

        let txn = db.begin_read().map_err(|e| read_error(&e))?;
        let table = match txn.open_table(MEASUREMENTS) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => return Ok(Vec::new()),
            Err(e) => return Err(read_error(&e)),
        };

        let lower = match after {
            Some(key) => Bound::Excluded(key),
            None => Bound::Unbounded,
        };
        let range = table
            .range::<&str>((lower, Bound::Unbounded))
            .map_err(|e| read_error(&e))?;

        let mut entries = Vec::with_capacity(limit.min(1024));
        for item in range.take(limit) {
            let (key, value) = item.map_err(|e| read_error(&e))?;
            entries.push(StoredEntry {
                key: key.value().to_string(),
                value: value.value().to_vec(),
            });
        }
        Ok(entries)
    }
}

impl fmt::Debug for RedbMeasurementStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedbMeasurementStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MeasurementStore for RedbMeasurementStore {
    async fn put(&self, key: &StorageKey, value: Vec<u8>) -> Result<(), DomainError> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();
        let task_key = key.clone();

        tokio::task::spawn_blocking(move || Self::put_blocking(&db, &task_key, &value))
            .await
            .map_err(|e| DomainError::StoreWrite {
                key: key.clone(),
                reason: e.to_string(),
            })??;

        debug!(key = %key, "Measurement persisted");
        Ok(())
    }

    async fn scan_after(
        &self,
        after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<StoredEntry>, DomainError> {
        let db = Arc::clone(&self.db);
        let after = after.map(str::to_string);

        tokio::task::spawn_blocking(move || Self::scan_blocking(&db, after.as_deref(), limit))
            .await
            .map_err(|e| DomainError::StoreRead(e.to_string()))?
    }
}
