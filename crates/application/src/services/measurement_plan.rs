use dnsperf_domain::ServerTarget;
use std::sync::Arc;

/// One cell of the benchmark matrix, with the sequence number it owns.
#[derive(Debug, Clone, Copy)]
pub struct PlannedLookup<'a> {
    pub sequence: u64,
    pub iteration: u32,
    pub server: &'a ServerTarget,
    pub domain: &'a Arc<str>,
}

/// Traversal order of a run: iteration (outermost), then server, then domain,
/// each in input order. Sequence numbers follow this order from 0 and are not
/// reset between iterations.
#[derive(Debug, Clone, Copy)]
pub struct MeasurementPlan<'a> {
    servers: &'a [ServerTarget],
    domains: &'a [Arc<str>],
    iterations: u32,
}

impl<'a> MeasurementPlan<'a> {
    pub fn new(servers: &'a [ServerTarget], domains: &'a [Arc<str>], iterations: u32) -> Self {
        Self {
            servers,
            domains,
            iterations,
        }
    }

    /// Total number of lookups (`iterations × servers × domains`).
    pub fn len(&self) -> u64 {
        u64::from(self.iterations) * self.servers.len() as u64 * self.domains.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lookups(&self) -> impl Iterator<Item = PlannedLookup<'a>> + 'a {
        let servers = self.servers;
        let domains = self.domains;

        (0..self.iterations)
            .flat_map(move |iteration| {
                servers.iter().flat_map(move |server| {
                    domains.iter().map(move |domain| (iteration, server, domain))
                })
            })
            .zip(0u64..)
            .map(|((iteration, server, domain), sequence)| PlannedLookup {
                sequence,
                iteration,
                server,
                domain,
            })
    }
}
