use dnsperf_domain::{DomainError, LookupStatus, ServerTarget, StorageKey};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{DnsResolver, IdentityProvider, MeasurementStore};
use crate::services::{MeasurementPlan, RecordBuilder};

const RUN_START_ATTEMPTS: u32 = 10;
const RUN_START_RETRY_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run_id: String,
    pub run_started_at: String,
    /// Lookups performed; equals the number of sequence numbers consumed.
    pub lookups: u64,
    pub records_written: u64,
    pub failed_lookups: u64,
    /// Exchanges that completed without any A record.
    pub empty_answers: u64,
    pub encode_failures: u64,
}

/// Drives one benchmark run over the full iteration × server × domain matrix.
///
/// Lookups run one at a time. Every record is written before the next lookup
/// starts, keyed by `<run start>|<sequence>`.
pub struct RunBenchmarkUseCase {
    resolver: Arc<dyn DnsResolver>,
    ids: Arc<dyn IdentityProvider>,
    store: Arc<dyn MeasurementStore>,
    builder: RecordBuilder,
}

impl RunBenchmarkUseCase {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        ids: Arc<dyn IdentityProvider>,
        store: Arc<dyn MeasurementStore>,
    ) -> Self {
        Self {
            resolver,
            builder: RecordBuilder::new(Arc::clone(&ids)),
            ids,
            store,
        }
    }

    #[instrument(skip(self, servers, domains), fields(servers = servers.len(), domains = domains.len()))]
    pub async fn execute(
        &self,
        servers: &[ServerTarget],
        domains: &[Arc<str>],
        iterations: u32,
    ) -> Result<RunSummary, DomainError> {
        if iterations == 0 {
            return Err(DomainError::InvalidIterations(iterations));
        }

        let plan = MeasurementPlan::new(servers, domains, iterations);
        if plan.is_empty() {
            warn!("Nothing to measure: server or domain list is empty");
        }

        let mut summary = RunSummary {
            run_id: self.ids.new_run_id(),
            run_started_at: self.claim_run_start().await?,
            lookups: 0,
            records_written: 0,
            failed_lookups: 0,
            empty_answers: 0,
            encode_failures: 0,
        };

        info!(
            run_id = %summary.run_id,
            started_at = %summary.run_started_at,
            planned = plan.len(),
            "Benchmark run started"
        );

        for lookup in plan.lookups() {
            debug!(
                iteration = lookup.iteration,
                sequence = lookup.sequence,
                server = %lookup.server.address,
                domain = %lookup.domain,
                "Resolving"
            );

            let outcome = self
                .resolver
                .resolve(lookup.server.address, lookup.domain)
                .await;
            summary.lookups += 1;

            match outcome.status {
                LookupStatus::Failed => summary.failed_lookups += 1,
                LookupStatus::Resolved if !outcome.has_answer() => summary.empty_answers += 1,
                LookupStatus::Resolved => {}
            }

            let at = self.ids.now();
            let record = self.builder.build(
                lookup.server,
                lookup.domain,
                &summary.run_id,
                lookup.sequence,
                at,
                &outcome,
            );

            debug!(
                sequence = record.sequence,
                status = outcome.status.as_str(),
                lookup_time = record.lookup_time,
                lookup_ip = %record.lookup_ip,
                "Lookup finished"
            );

            let value = match record.encode() {
                Ok(value) => value,
                Err(e) => {
                    warn!(error = %e, sequence = record.sequence, "Skipping record that could not be encoded");
                    summary.encode_failures += 1;
                    continue;
                }
            };

            let key = StorageKey::new(summary.run_started_at.as_str(), lookup.sequence);
            self.store.put(&key, value).await.map_err(|e| {
                error!(error = %e, key = %key, "Failed to persist measurement, aborting run");
                e
            })?;
            summary.records_written += 1;
        }

        info!(
            run_id = %summary.run_id,
            lookups = summary.lookups,
            written = summary.records_written,
            failed = summary.failed_lookups,
            empty = summary.empty_answers,
            "Benchmark run finished"
        );

        Ok(summary)
    }

    /// Picks a run start no earlier run in the store has used, so keys are never reused.
    async fn claim_run_start(&self) -> Result<String, DomainError> {
        let mut candidate = self.ids.now();
        for attempt in 1..RUN_START_ATTEMPTS {
            if !self.run_start_taken(&candidate).await? {
                return Ok(candidate);
            }
            debug!(run_started_at = %candidate, attempt, "Run start already in store, waiting for the clock");
            tokio::time::sleep(RUN_START_RETRY_DELAY).await;
            candidate = self.ids.now();
        }
        if !self.run_start_taken(&candidate).await? {
            return Ok(candidate);
        }

        error!(run_started_at = %candidate, "Clock did not advance past an existing run start");
        Err(DomainError::StoreWrite {
            key: StorageKey::new(candidate, 0).to_string(),
            reason: "a run with this start time already exists in the store".to_string(),
        })
    }

    async fn run_start_taken(&self, run_started_at: &str) -> Result<bool, DomainError> {
        let prefix = format!("{run_started_at}|");
        let next = self.store.scan_after(Some(&prefix), 1).await?;
        Ok(next.first().is_some_and(|entry| entry.key.starts_with(&prefix)))
    }
}
