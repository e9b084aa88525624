/// Source of identifiers and timestamps for runs and records.
pub trait IdentityProvider: Send + Sync {
    /// Fresh identifier shared by every record of one run.
    fn new_run_id(&self) -> String;

    /// Fresh identifier for a single record.
    fn new_record_id(&self) -> String;

    /// Current wall-clock time as a fixed-width sortable string with milliseconds.
    fn now(&self) -> String;
}
