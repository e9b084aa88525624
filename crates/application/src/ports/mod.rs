pub mod dns_resolver;
pub mod identity_provider;
pub mod measurement_store;
pub mod perf_row_sink;

pub use dns_resolver::DnsResolver;
pub use identity_provider::IdentityProvider;
pub use measurement_store::{MeasurementStore, StoredEntry};
pub use perf_row_sink::PerfRowSink;
