//! Configuration module for DNS Perf
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `benchmark`: Input lists and iteration count for a benchmark run
//! - `store`: Location of the write-optimized measurement log
//! - `database`: Location of the relational `perf` database
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod benchmark;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod store;

pub use benchmark::BenchmarkConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use store::StoreConfig;
