use async_trait::async_trait;
use dnsperf_application::ports::DnsResolver;
use dnsperf_domain::{DomainError, LookupOutcome};
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::debug;

use super::forwarding::{DnsReply, MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, UdpTransport, DEFAULT_QUERY_TIMEOUT};

pub const DNS_PORT: u16 = 53;

/// Resolver that times one fresh UDP exchange per lookup.
///
/// No retries, caching or socket reuse. The clock covers building the query,
/// the round trip and parsing the reply, and runs whether or not the lookup
/// succeeds.
pub struct UdpLookupResolver {
    port: u16,
    timeout: Duration,
}

impl UdpLookupResolver {
    pub fn new() -> Self {
        Self {
            port: DNS_PORT,
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn exchange(&self, server: IpAddr, domain: &str) -> Result<DnsReply, DomainError> {
        let (id, query) = MessageBuilder::build_a_query(domain)?;

        let transport = UdpTransport::new(SocketAddr::new(server, self.port));
        let response = transport.send(&query, self.timeout).await?;

        let reply = ResponseParser::parse(&response.bytes)?;
        if reply.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                reply.id, id
            )));
        }
        Ok(reply)
    }
}

impl Default for UdpLookupResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for UdpLookupResolver {
    async fn resolve(&self, server: IpAddr, domain: &str) -> LookupOutcome {
        let start = Instant::now();
        let result = self.exchange(server, domain).await;
        let elapsed = start.elapsed().as_secs_f64();

        match result {
            Ok(reply) if reply.is_server_error() => {
                debug!(
                    server = %server,
                    domain = %domain,
                    rcode = ResponseParser::rcode_to_status(reply.rcode),
                    "Server refused or failed the query"
                );
                LookupOutcome::failed(elapsed)
            }
            Ok(reply) => {
                if reply.first_a.is_none() {
                    debug!(
                        server = %server,
                        domain = %domain,
                        rcode = ResponseParser::rcode_to_status(reply.rcode),
                        answers = reply.answer_count,
                        "Reply carried no A record"
                    );
                }
                LookupOutcome::resolved(reply.first_a, elapsed)
            }
            Err(e) => {
                debug!(server = %server, domain = %domain, error = %e, "Lookup failed");
                LookupOutcome::failed(elapsed)
            }
        }
    }
}
