//! Wiring shared by the `dnsperf` and `dbsync` binaries.

pub mod bootstrap;
pub mod runner;
