pub mod migrate_records;
pub mod run_benchmark;

pub use migrate_records::{MigrateRecordsUseCase, MigrationSummary};
pub use run_benchmark::{RunBenchmarkUseCase, RunSummary};
