use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid server line: {0}")]
    InvalidServerLine(String),

    #[error("Iteration count must be at least 1, got {0}")]
    InvalidIterations(u32),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("DNS query to {server} timed out")]
    TransportTimeout { server: String },

    #[error("DNS transport error for {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to encode record {counter}: {reason}")]
    RecordEncoding { counter: u64, reason: String },

    #[error("Store open failed for {path}: {reason}")]
    StoreOpen { path: String, reason: String },

    #[error("Store write failed for key <{key}>: {reason}")]
    StoreWrite { key: String, reason: String },

    #[error("Store read failed: {0}")]
    StoreRead(String),

    #[error("Could not decode record for key <{key}>: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("Could not insert record {id} for key <{key}>: {reason}")]
    InsertFailed {
        key: String,
        id: String,
        reason: String,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
