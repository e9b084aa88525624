use serde::{Deserialize, Serialize};

/// Write-optimized measurement log
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the measurement log file (default: "dnsperfdb")
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "dnsperfdb".to_string()
}
