use dnsperf_application::ports::IdentityProvider;
use uuid::Uuid;

/// `YYYY-MM-DD HH:MM:SS.mmm`, always 23 characters.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Random v4 UUIDs and the UTC wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdentityProvider;

impl SystemIdentityProvider {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityProvider for SystemIdentityProvider {
    fn new_run_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn new_record_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn now(&self) -> String {
        chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
