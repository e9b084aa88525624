pub mod perf_repository;

pub use perf_repository::SqlitePerfRepository;
