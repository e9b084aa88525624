#![allow(dead_code)]

use async_trait::async_trait;
use dnsperf_application::ports::{
    DnsResolver, IdentityProvider, MeasurementStore, PerfRowSink, StoredEntry,
};
use dnsperf_domain::{DomainError, LookupOutcome, PerfRow, ServerTarget, StorageKey};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock DnsResolver
// ============================================================================

#[derive(Clone)]
pub struct MockDnsResolver {
    answer: Ipv4Addr,
    failing: Arc<RwLock<HashSet<(IpAddr, String)>>>,
    empty: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<(IpAddr, String)>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            answer: Ipv4Addr::new(192, 0, 2, 1),
            failing: Arc::new(RwLock::new(HashSet::new())),
            empty: Arc::new(RwLock::new(HashSet::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Makes every lookup of `domain` against `server` fail.
    pub async fn fail_for(&self, server: &str, domain: &str) {
        self.failing
            .write()
            .await
            .insert((server.parse().unwrap(), domain.to_string()));
    }

    /// Makes lookups of `domain` complete without an A record.
    pub async fn no_answer_for(&self, domain: &str) {
        self.empty.write().await.insert(domain.to_string());
    }

    pub async fn calls(&self) -> Vec<(IpAddr, String)> {
        self.calls.read().await.clone()
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, server: IpAddr, domain: &str) -> LookupOutcome {
        self.calls.write().await.push((server, domain.to_string()));

        if self
            .failing
            .read()
            .await
            .contains(&(server, domain.to_string()))
        {
            return LookupOutcome::failed(0.5);
        }
        if self.empty.read().await.contains(domain) {
            return LookupOutcome::resolved(None, 0.01);
        }
        LookupOutcome::resolved(Some(self.answer), 0.01)
    }
}

// ============================================================================
// Deterministic IdentityProvider
// ============================================================================

pub struct SequentialIdentityProvider {
    runs: AtomicU64,
    records: AtomicU64,
    ticks: AtomicU64,
}

impl SequentialIdentityProvider {
    pub fn new() -> Self {
        Self {
            runs: AtomicU64::new(0),
            records: AtomicU64::new(0),
            ticks: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SequentialIdentityProvider {
    fn new_run_id(&self) -> String {
        format!("run-{}", self.runs.fetch_add(1, Ordering::SeqCst))
    }

    fn new_record_id(&self) -> String {
        format!("rec-{:04}", self.records.fetch_add(1, Ordering::SeqCst))
    }

    fn now(&self) -> String {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        format!("2024-03-01 12:00:{:02}.{:03}", (tick / 1000) % 60, tick % 1000)
    }
}

/// Returns the same timestamp for the first `frozen_calls` calls to `now()`,
/// then advances one millisecond per call.
pub struct StalledClockIdentityProvider {
    inner: SequentialIdentityProvider,
    frozen_calls: u64,
    calls: AtomicU64,
}

impl StalledClockIdentityProvider {
    pub fn new(frozen_calls: u64) -> Self {
        Self {
            inner: SequentialIdentityProvider::new(),
            frozen_calls,
            calls: AtomicU64::new(0),
        }
    }

    pub fn now_calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdentityProvider for StalledClockIdentityProvider {
    fn new_run_id(&self) -> String {
        self.inner.new_run_id()
    }

    fn new_record_id(&self) -> String {
        self.inner.new_record_id()
    }

    fn now(&self) -> String {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.frozen_calls {
            "2024-03-01 12:00:00.000".to_string()
        } else {
            let tick = call - self.frozen_calls + 1;
            format!("2024-03-01 12:00:{:02}.{:03}", (tick / 1000) % 60, tick % 1000)
        }
    }
}

// ============================================================================
// In-memory MeasurementStore
// ============================================================================

#[derive(Clone)]
pub struct InMemoryMeasurementStore {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    fail_after: Arc<RwLock<Option<usize>>>,
}

impl InMemoryMeasurementStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            fail_after: Arc::new(RwLock::new(None)),
        }
    }

    /// Accepts `n` more writes, then fails every `put`.
    pub async fn fail_after(&self, n: usize) {
        *self.fail_after.write().await = Some(n);
    }

    pub async fn insert_raw(&self, key: &str, value: &[u8]) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
    }

    pub async fn entries(&self) -> Vec<(String, Vec<u8>)> {
        self.entries
            .read()
            .await
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for InMemoryMeasurementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MeasurementStore for InMemoryMeasurementStore {
    async fn put(&self, key: &StorageKey, value: Vec<u8>) -> Result<(), DomainError> {
        let mut fail_after = self.fail_after.write().await;
        if let Some(remaining) = fail_after.as_mut() {
            if *remaining == 0 {
                return Err(DomainError::StoreWrite {
                    key: key.to_string(),
                    reason: "disk full".to_string(),
                });
            }
            *remaining -= 1;
        }

        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn scan_after(
        &self,
        after: Option<&str>,
        limit: usize,
    ) -> Result<Vec<StoredEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(k, _)| after.map_or(true, |a| k.as_str() > a))
            .take(limit)
            .map(|(k, v)| StoredEntry {
                key: k.clone(),
                value: v.clone(),
            })
            .collect())
    }
}

// ============================================================================
// In-memory PerfRowSink
// ============================================================================

#[derive(Clone)]
pub struct InMemoryPerfRowSink {
    rows: Arc<RwLock<HashMap<String, PerfRow>>>,
    failing_ids: Arc<RwLock<HashSet<String>>>,
    table_created: Arc<RwLock<u32>>,
}

impl InMemoryPerfRowSink {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
            failing_ids: Arc::new(RwLock::new(HashSet::new())),
            table_created: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn fail_on(&self, id: &str) {
        self.failing_ids.write().await.insert(id.to_string());
    }

    pub async fn row(&self, id: &str) -> Option<PerfRow> {
        self.rows.read().await.get(id).cloned()
    }

    pub async fn ensure_table_calls(&self) -> u32 {
        *self.table_created.read().await
    }
}

impl Default for InMemoryPerfRowSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PerfRowSink for InMemoryPerfRowSink {
    async fn ensure_table(&self) -> Result<(), DomainError> {
        *self.table_created.write().await += 1;
        Ok(())
    }

    async fn insert_if_absent(&self, row: &PerfRow) -> Result<bool, DomainError> {
        if self.failing_ids.read().await.contains(&row.id) {
            return Err(DomainError::DatabaseError("constraint failed".to_string()));
        }

        let mut rows = self.rows.write().await;
        if rows.contains_key(&row.id) {
            return Ok(false);
        }
        rows.insert(row.id.clone(), row.clone());
        Ok(true)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.rows.read().await.len() as u64)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn server(addr: &str, desc: &str) -> ServerTarget {
    ServerTarget::new(addr.parse().unwrap(), desc)
}

pub fn domains(names: &[&str]) -> Vec<Arc<str>> {
    names.iter().map(|d| Arc::from(*d)).collect()
}
