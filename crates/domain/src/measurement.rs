use crate::errors::DomainError;
use crate::server_target::ServerTarget;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    pub addr: String,
    pub desc: String,
}

impl From<&ServerTarget> for ServerSnapshot {
    fn from(server: &ServerTarget) -> Self {
        Self {
            addr: server.address.to_string(),
            desc: server.description.to_string(),
        }
    }
}

/// One persisted measurement. Written once to the measurement log and never mutated.
///
/// The serde layout is the wire format shared with `dbsync`: field names and
/// nesting must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub server: ServerSnapshot,
    pub at: String,
    #[serde(rename = "rid")]
    pub run_id: String,
    #[serde(rename = "counter")]
    pub sequence: u64,
    pub id: String,
    pub domain: String,
    pub lookup_time: f64,
    /// Empty when the lookup produced no usable A record.
    pub lookup_ip: String,
}

impl MeasurementRecord {
    pub fn has_answer(&self) -> bool {
        !self.lookup_ip.is_empty()
    }

    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        serde_json::to_vec_pretty(self).map_err(|e| DomainError::RecordEncoding {
            counter: self.sequence,
            reason: e.to_string(),
        })
    }

    /// Decodes a stored value. `key` is only used to identify the record in errors.
    pub fn decode(key: &str, bytes: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::CorruptRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
