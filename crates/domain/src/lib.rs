//! DNS Perf Domain Layer
pub mod config;
pub mod domain_list;
pub mod errors;
pub mod lookup;
pub mod measurement;
pub mod perf_row;
pub mod server_target;
pub mod storage_key;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_list::parse_domain_list;
pub use errors::DomainError;
pub use lookup::{LookupOutcome, LookupStatus};
pub use measurement::{MeasurementRecord, ServerSnapshot};
pub use perf_row::PerfRow;
pub use server_target::{parse_server_list, ServerTarget};
pub use storage_key::StorageKey;
