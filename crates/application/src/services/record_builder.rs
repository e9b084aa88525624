use dnsperf_domain::{LookupOutcome, MeasurementRecord, ServerSnapshot, ServerTarget};
use std::sync::Arc;

use crate::ports::IdentityProvider;

/// Assembles measurement records. Only the record `id` is generated here;
/// everything else comes from the arguments.
pub struct RecordBuilder {
    ids: Arc<dyn IdentityProvider>,
}

impl RecordBuilder {
    pub fn new(ids: Arc<dyn IdentityProvider>) -> Self {
        Self { ids }
    }

    pub fn build(
        &self,
        server: &ServerTarget,
        domain: &str,
        run_id: &str,
        sequence: u64,
        at: String,
        outcome: &LookupOutcome,
    ) -> MeasurementRecord {
        MeasurementRecord {
            server: ServerSnapshot::from(server),
            at,
            run_id: run_id.to_string(),
            sequence,
            id: self.ids.new_record_id(),
            domain: domain.to_string(),
            lookup_time: outcome.elapsed_seconds,
            lookup_ip: outcome.address_text(),
        }
    }
}
