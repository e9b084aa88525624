pub mod udp;

use async_trait::async_trait;
use dnsperf_domain::DomainError;
use std::time::Duration;

pub use udp::UdpTransport;

/// Transport default for one send or receive; not configurable per call.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}
