use serde::{Deserialize, Serialize};

/// Benchmark run parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BenchmarkConfig {
    /// File with DNS servers to use (default: "servers.txt")
    #[serde(default = "default_servers_file")]
    pub servers_file: String,

    /// File with domains to query (default: "domains.txt")
    #[serde(default = "default_domains_file")]
    pub domains_file: String,

    /// Number of passes over the full server × domain matrix (default: 1)
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            servers_file: default_servers_file(),
            domains_file: default_domains_file(),
            iterations: default_iterations(),
        }
    }
}

fn default_servers_file() -> String {
    "servers.txt".to_string()
}

fn default_domains_file() -> String {
    "domains.txt".to_string()
}

fn default_iterations() -> u32 {
    1
}
