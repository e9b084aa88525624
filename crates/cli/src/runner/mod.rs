pub mod benchmark;
pub mod sync;

pub use benchmark::run_benchmark;
pub use sync::run_sync;
