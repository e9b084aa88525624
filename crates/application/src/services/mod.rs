pub mod measurement_plan;
pub mod record_builder;
pub mod store_scan;

pub use measurement_plan::{MeasurementPlan, PlannedLookup};
pub use record_builder::RecordBuilder;
pub use store_scan::StoreScan;
