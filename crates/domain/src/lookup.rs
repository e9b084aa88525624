use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    /// The exchange completed. The reply may still carry no A record.
    Resolved,
    /// Timeout, refusal, malformed reply or any other transport failure.
    Failed,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Resolved => "resolved",
            LookupStatus::Failed => "failed",
        }
    }
}

/// Result of one query against one server. Consumed by the record builder only.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub status: LookupStatus,
    pub resolved_address: Option<Ipv4Addr>,
    pub elapsed_seconds: f64,
}

impl LookupOutcome {
    pub fn resolved(address: Option<Ipv4Addr>, elapsed_seconds: f64) -> Self {
        Self {
            status: LookupStatus::Resolved,
            resolved_address: address,
            elapsed_seconds: elapsed_seconds.max(0.0),
        }
    }

    pub fn failed(elapsed_seconds: f64) -> Self {
        Self {
            status: LookupStatus::Failed,
            resolved_address: None,
            elapsed_seconds: elapsed_seconds.max(0.0),
        }
    }

    /// True only when an A record was obtained; `Resolved` with no address is not usable.
    pub fn has_answer(&self) -> bool {
        self.resolved_address.is_some()
    }

    /// Address in canonical text form, or empty when unresolved.
    pub fn address_text(&self) -> String {
        self.resolved_address
            .map(|ip| ip.to_string())
            .unwrap_or_default()
    }
}
