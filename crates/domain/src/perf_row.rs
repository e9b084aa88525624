use crate::measurement::MeasurementRecord;

/// Flattened row of the `perf` table, keyed by `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfRow {
    pub id: String,
    pub rid: String,
    pub counter: i64,
    pub at: String,
    pub server_addr: String,
    pub server_desc: String,
    pub domain: String,
    pub lookup_time: f64,
    /// `None` when the measurement has no usable answer.
    pub lookup_ip: Option<String>,
}

impl From<&MeasurementRecord> for PerfRow {
    fn from(record: &MeasurementRecord) -> Self {
        Self {
            id: record.id.clone(),
            rid: record.run_id.clone(),
            counter: i64::try_from(record.sequence).unwrap_or(i64::MAX),
            at: record.at.clone(),
            server_addr: record.server.addr.clone(),
            server_desc: record.server.desc.clone(),
            domain: record.domain.clone(),
            lookup_time: record.lookup_time,
            lookup_ip: record
                .has_answer()
                .then(|| record.lookup_ip.clone()),
        }
    }
}
