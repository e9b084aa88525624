use async_trait::async_trait;
use dnsperf_domain::LookupOutcome;
use std::net::IpAddr;

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Issues a single A query for `domain` against `server`.
    ///
    /// Never fails: transport and protocol errors are reported as
    /// `LookupStatus::Failed`, and the elapsed time is measured either way.
    async fn resolve(&self, server: IpAddr, domain: &str) -> LookupOutcome;
}
